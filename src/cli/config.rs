use clap::{Parser, Subcommand};

/// Arguments for the config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Enable pathogen:\n    prion config add 'execute pathogen#infect()'\n\n\
                  Open the vimrc in $EDITOR:\n    prion config edit")]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Append a line to the vimrc
    Add {
        /// Text to append
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Open the vimrc in $EDITOR (vim when unset)
    Edit,
}
