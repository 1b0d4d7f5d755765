//! Git error handling
//!
//! This module handles:
//! - Interpreting git2 errors into user-friendly messages
//! - Categorizing errors into [`GitFailure`] kinds so callers never inspect
//!   libgit2 message text themselves

use git2::{ErrorClass, ErrorCode};
use thiserror::Error;

/// What went wrong in a version-control operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitFailure {
    /// The local checkout lacks the history needed to merge (e.g. a shallow clone)
    ShallowHistory,
    /// The remote's SSH host key does not match the locally trusted one
    HostKeyMismatch { host: Option<String> },
    RepositoryNotFound,
    AuthenticationFailed,
    PermissionDenied,
    Network,
    Other,
}

/// A classified version-control failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GitError {
    pub kind: GitFailure,
    pub message: String,
}

impl GitError {
    pub fn new(kind: GitFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classify a libgit2 error. `shallow` tells whether the repository the
    /// operation ran against is a shallow clone.
    pub fn from_git2(err: &git2::Error, shallow: bool) -> Self {
        let kind = classify(err, shallow);
        let message = interpret(err, &kind);
        Self { kind, message }
    }

    /// Attach the remote host to a host key mismatch.
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let GitFailure::HostKeyMismatch { host: slot } = &mut self.kind {
            if slot.is_none() {
                *slot = host;
            }
        }
        self
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::from_git2(&err, false)
    }
}

type ErrorCheck = fn(&str, ErrorClass, ErrorCode, bool) -> bool;

/// Ordered: the first matching check wins.
const ERROR_CLASSIFICATIONS: &[(ErrorCheck, fn() -> GitFailure)] = &[
    (
        |msg, class, code, shallow| {
            msg.contains("object not found")
                || msg.contains("shallow")
                || (shallow && class == ErrorClass::Odb && code == ErrorCode::NotFound)
        },
        || GitFailure::ShallowHistory,
    ),
    (
        |msg, class, _, _| {
            msg.contains("key mismatch")
                || msg.contains("hostkey mismatch")
                || msg.contains("host key mismatch")
                || (class == ErrorClass::Ssh && msg.contains("hostkey") && msg.contains("known"))
        },
        || GitFailure::HostKeyMismatch { host: None },
    ),
    (
        |msg, _, _, _| {
            msg.contains("not found")
                || msg.contains("404")
                || msg.contains("too many redirects")
                || msg.contains("authentication replays")
                || msg.contains("does not appear to be a git repository")
        },
        || GitFailure::RepositoryNotFound,
    ),
    (
        |msg, _, code, _| {
            code == ErrorCode::Auth || msg.contains("authentication") || msg.contains("credentials")
        },
        || GitFailure::AuthenticationFailed,
    ),
    (
        |msg, _, _, _| msg.contains("permission denied") || msg.contains("access denied"),
        || GitFailure::PermissionDenied,
    ),
    (
        |msg, class, _, _| {
            class == ErrorClass::Net
                || msg.contains("connection")
                || msg.contains("network")
                || msg.contains("timeout")
                || msg.contains("timed out")
        },
        || GitFailure::Network,
    ),
];

fn classify(err: &git2::Error, shallow: bool) -> GitFailure {
    let message = err.message().to_lowercase();
    for (check, kind) in ERROR_CLASSIFICATIONS {
        if check(&message, err.class(), err.code(), shallow) {
            return kind();
        }
    }
    GitFailure::Other
}

fn interpret(err: &git2::Error, kind: &GitFailure) -> String {
    match kind {
        GitFailure::ShallowHistory => format!("History is incomplete: {}", err.message()),
        GitFailure::HostKeyMismatch { .. } => format!("SSH host key mismatch: {}", err.message()),
        GitFailure::RepositoryNotFound => "Repository not found".to_string(),
        GitFailure::AuthenticationFailed => "Authentication failed".to_string(),
        GitFailure::PermissionDenied => "Permission denied".to_string(),
        GitFailure::Network => "Network error".to_string(),
        GitFailure::Other => match err.class() {
            ErrorClass::Http => format!("HTTP error: {}", err.message()),
            ErrorClass::Ssh => format!("SSH error: {}", err.message()),
            _ => err.message().to_string(),
        },
    }
}
