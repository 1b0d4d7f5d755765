//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - reinstall: Reinstall command arguments
//! - remove: Remove command arguments
//! - update: Update command arguments
//! - list: List command arguments
//! - config: Vimrc subcommands
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

pub mod completions;
pub mod config;
pub mod install;
pub mod list;
pub mod reinstall;
pub mod remove;
pub mod update;

pub use completions::CompletionsArgs;
pub use config::{ConfigArgs, ConfigSubcommand};
pub use install::InstallArgs;
pub use list::ListArgs;
pub use reinstall::ReinstallArgs;
pub use remove::RemoveArgs;
pub use update::UpdateArgs;

/// Prion - vim plugin manager
///
/// Install, update and remove vim plugins kept as git checkouts in a bundle directory.
#[derive(Parser, Debug)]
#[command(
    name = "prion",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage vim plugins as git checkouts",
    long_about = "Prion manages vim plugins as git checkouts inside a bundle directory \
                  (~/.vim/bundle by default), the layout used by pathogen-style loaders.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  prion install https://github.com/tpope/vim-sensible.git  \x1b[90m# Install a plugin\x1b[0m\n   \
                  prion update --all                                      \x1b[90m# Update every plugin\x1b[0m\n   \
                  prion rm vim-sensible                                   \x1b[90m# Remove a plugin\x1b[0m\n   \
                  prion ls                                                \x1b[90m# List installed plugins\x1b[0m\n   \
                  prion config add 'execute pathogen#infect()'            \x1b[90m# Append to vimrc\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Bundle directory holding installed plugins (defaults to ~/.vim/bundle)
    #[arg(long, global = true, env = "VIM_BUNDLE_DIR", value_name = "DIR")]
    pub bundle_dir: Option<PathBuf>,

    /// Path to the vimrc (defaults to ~/.vimrc)
    #[arg(long, global = true, env = "VIMRC_PATH", value_name = "FILE")]
    pub vimrc: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/prion/config.yaml)
    #[arg(long, global = true, env = "PRION_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory used to stage clones before they are moved into the bundle directory
    #[arg(long, global = true, env = "PRION_STAGING_DIR", value_name = "DIR", hide = true)]
    pub staging_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings overrides given on the command line or through the environment.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config.clone(),
            bundle_dir: self.bundle_dir.clone(),
            vimrc_path: self.vimrc.clone(),
            staging_dir: self.staging_dir.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install plugins from git URLs
    Install(InstallArgs),

    /// Replace plugins with fresh clones of their origin
    Reinstall(ReinstallArgs),

    /// Remove installed plugins
    #[command(name = "rm", visible_alias = "remove")]
    Remove(RemoveArgs),

    /// Pull new changes for installed plugins
    Update(UpdateArgs),

    /// List installed plugins
    #[command(name = "ls", visible_alias = "list")]
    List(ListArgs),

    /// Change the vimrc
    Config(ConfigArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
