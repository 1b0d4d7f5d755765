use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed plugins:\n    prion ls\n\n\
                  Show origins and paths:\n    prion ls --detailed\n\n\
                  Machine-readable output:\n    prion ls --json")]
pub struct ListArgs {
    /// Show each plugin's origin and path
    #[arg(long)]
    pub detailed: bool,

    /// Print the plugins as a JSON array
    #[arg(long, conflicts_with = "detailed")]
    pub json: bool,
}
