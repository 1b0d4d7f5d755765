use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a plugin:\n    prion rm vim-sensible\n\n\
                  Remove several plugins:\n    prion remove vim-sensible vim-fugitive")]
pub struct RemoveArgs {
    /// Names of installed plugins
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}
