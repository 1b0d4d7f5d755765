use clap::Parser;

/// Arguments for the reinstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Repair a plugin that fails to update:\n    prion reinstall vim-sensible")]
pub struct ReinstallArgs {
    /// Names of installed plugins
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_reinstall() {
        let cli = Cli::try_parse_from(["prion", "reinstall", "a", "b"]).unwrap();
        match cli.command {
            Commands::Reinstall(args) => assert_eq!(args.names, vec!["a", "b"]),
            _ => panic!("Expected Reinstall command"),
        }
    }

    #[test]
    fn test_cli_parsing_reinstall_requires_name() {
        assert!(Cli::try_parse_from(["prion", "reinstall"]).is_err());
    }
}
