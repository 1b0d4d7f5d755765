//! Error types and handling for prion
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`package`]: Package lifecycle errors
//! - [`config`]: Configuration and vimrc errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod package;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for prion operations
#[derive(Error, Diagnostic, Debug)]
pub enum PrionError {
    // Package errors
    #[error("{name} is already installed")]
    #[diagnostic(
        code(prion::package::already_installed),
        help(
            "Run 'prion update {name}' to pull new changes, or 'prion reinstall {name}' to replace it with a fresh clone"
        )
    )]
    AlreadyInstalled { name: String },

    #[error("No package named {name}")]
    #[diagnostic(
        code(prion::package::not_installed),
        help("Run 'prion ls' to see the installed packages")
    )]
    NotInstalled { name: String },

    #[error("Invalid package name: {name}")]
    #[diagnostic(
        code(prion::package::invalid_name),
        help("Package names are single directory names inside the bundle directory")
    )]
    InvalidPackageName { name: String },

    // Source errors
    #[error("Invalid source URL: {url}")]
    #[diagnostic(
        code(prion::source::invalid_url),
        help(
            "Valid formats: https://github.com/owner/repo.git, git@github.com:owner/repo.git, /path/to/repo"
        )
    )]
    InvalidSourceUrl { url: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(prion::git::clone_failed),
        help("Check that the URL is correct and you have access to the repository")
    )]
    CloneFailed { url: String, reason: String },

    #[error("Failed to update {name}: {reason}")]
    #[diagnostic(code(prion::git::pull_failed))]
    PullFailed { name: String, reason: String },

    #[error("Could not read the origin of {name}: {reason}")]
    #[diagnostic(
        code(prion::git::remote_unavailable),
        help("Remove the package with 'prion rm {name}' and install it again from its URL")
    )]
    RemoteUrlUnavailable { name: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(prion::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(prion::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(prion::config::invalid))]
    ConfigInvalid { message: String },

    // Vimrc errors
    #[error("vimrc not found: {path}")]
    #[diagnostic(
        code(prion::vimrc::not_found),
        help("Create the file first, or point --vimrc / VIMRC_PATH at an existing vimrc")
    )]
    VimrcNotFound { path: String },

    #[error("Editor '{editor}' failed: {reason}")]
    #[diagnostic(
        code(prion::vimrc::editor_failed),
        help("Set the EDITOR environment variable to an installed editor")
    )]
    EditorFailed { editor: String, reason: String },

    // File system errors
    #[error("Failed to prepare staging directory {path}: {reason}")]
    #[diagnostic(code(prion::fs::staging_failed))]
    StagingFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(prion::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(prion::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(prion::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Batch errors
    #[error("{failed} of {total} package(s) failed")]
    #[diagnostic(code(prion::batch::incomplete))]
    BatchIncomplete { failed: usize, total: usize },
}

impl PrionError {
    /// Whether a batch may carry on with the next package after this error.
    ///
    /// Anything not listed here stops the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PrionError::AlreadyInstalled { .. }
                | PrionError::NotInstalled { .. }
                | PrionError::InvalidPackageName { .. }
                | PrionError::InvalidSourceUrl { .. }
                | PrionError::CloneFailed { .. }
        )
    }
}

impl From<std::io::Error> for PrionError {
    fn from(err: std::io::Error) -> Self {
        PrionError::IoError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for PrionError {
    fn from(err: serde_json::Error) -> Self {
        PrionError::IoError {
            message: format!("Failed to serialize output: {err}"),
            source: None,
        }
    }
}

impl From<inquire::InquireError> for PrionError {
    fn from(err: inquire::InquireError) -> Self {
        PrionError::IoError {
            message: format!("Failed to read confirmation: {err}"),
            source: None,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PrionError>;
