//! Prion - vim plugin manager
//!
//! Keeps vim plugins as git checkouts in a bundle directory and edits the vimrc.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod git;
mod package;
mod temp;
#[cfg(test)]
mod test_fixtures;
mod ui;
mod vimrc;

use cli::{Cli, Commands};
use config::Settings;
use error::Result;

/// Filter directives come from here before falling back to the verbosity flag.
const LOG_ENV: &str = "PRION_LOG";

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "prion=debug" } else { "prion=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let overrides = cli.overrides();
    match cli.command {
        Commands::Install(args) => commands::install::run(&Settings::load(&overrides)?, args),
        Commands::Reinstall(args) => commands::reinstall::run(&Settings::load(&overrides)?, args),
        Commands::Remove(args) => commands::remove::run(&Settings::load(&overrides)?, args),
        Commands::Update(args) => commands::update::run(&Settings::load(&overrides)?, args),
        Commands::List(args) => commands::list::run(&Settings::load(&overrides)?, args),
        Commands::Config(args) => commands::config::run(&Settings::load(&overrides)?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        ui::display::print_error(&e);
        std::process::exit(1);
    }
}
