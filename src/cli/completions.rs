use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    prion completions bash > ~/.bash_completion.d/prion\n\n\
                  Generate zsh completions:\n    prion completions zsh > ~/.zfunc/_prion\n\n\
                  Generate fish completions:\n    prion completions fish > ~/.config/fish/completions/prion.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
