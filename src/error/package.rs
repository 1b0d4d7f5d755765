//! Package lifecycle errors

use super::PrionError;

/// Creates an already installed error
pub fn already_installed(name: impl Into<String>) -> PrionError {
    PrionError::AlreadyInstalled { name: name.into() }
}

/// Creates a not installed error
pub fn not_installed(name: impl Into<String>) -> PrionError {
    PrionError::NotInstalled { name: name.into() }
}

/// Creates an invalid package name error
pub fn invalid_name(name: impl Into<String>) -> PrionError {
    PrionError::InvalidPackageName { name: name.into() }
}

/// Creates an invalid source URL error
pub fn invalid_source_url(url: impl Into<String>) -> PrionError {
    PrionError::InvalidSourceUrl { url: url.into() }
}

/// Creates a clone failed error
pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> PrionError {
    PrionError::CloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a pull failed error
pub fn pull_failed(name: impl Into<String>, reason: impl Into<String>) -> PrionError {
    PrionError::PullFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a remote URL unavailable error
pub fn remote_unavailable(name: impl Into<String>, reason: impl Into<String>) -> PrionError {
    PrionError::RemoteUrlUnavailable {
        name: name.into(),
        reason: reason.into(),
    }
}
