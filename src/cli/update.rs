use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update one plugin:\n    prion update vim-sensible\n\n\
                  Update every installed plugin:\n    prion update --all")]
pub struct UpdateArgs {
    /// Names of installed plugins
    #[arg(value_name = "NAME", required_unless_present = "all", conflicts_with = "all")]
    pub names: Vec<String>,

    /// Update every installed plugin
    #[arg(long, short = 'a')]
    pub all: bool,
}
