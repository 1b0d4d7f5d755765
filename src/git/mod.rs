//! Git operations for package checkouts
//!
//! This module handles:
//! - The [`VersionControl`] seam the package manager talks to
//! - A libgit2-backed implementation, [`Git2Client`]
//! - Classifying libgit2 failures into typed [`GitFailure`] kinds
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/ and ssh-agent
//! - Git credential helpers

pub mod auth;
pub mod clone;
pub mod error;
pub mod pull;
pub mod url;

use std::path::Path;

use git2::Repository;

pub use error::{GitError, GitFailure};

/// Name of the remote packages are cloned from.
pub const ORIGIN: &str = "origin";

/// Result of a successful pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullStatus {
    UpToDate,
    Updated,
}

/// The version-control operations package management depends on.
pub trait VersionControl {
    /// Clone `url` into `dest`, an empty directory.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError>;

    /// Fetch from `origin` and merge into the checked-out branch.
    fn pull(&self, repo: &Path) -> Result<PullStatus, GitError>;

    /// URL of the `origin` remote of the checkout at `repo`.
    fn remote_url(&self, repo: &Path) -> Result<String, GitError>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError> {
        (**self).clone_repo(url, dest)
    }

    fn pull(&self, repo: &Path) -> Result<PullStatus, GitError> {
        (**self).pull(repo)
    }

    fn remote_url(&self, repo: &Path) -> Result<String, GitError> {
        (**self).remote_url(repo)
    }
}

/// [`VersionControl`] over libgit2.
#[derive(Debug, Clone)]
pub struct Git2Client {
    shallow: bool,
}

impl Git2Client {
    pub fn new() -> Self {
        Self { shallow: true }
    }
}

impl Default for Git2Client {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for Git2Client {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError> {
        clone::clone(url, dest, self.shallow)
    }

    fn pull(&self, repo: &Path) -> Result<PullStatus, GitError> {
        pull::pull(repo)
    }

    fn remote_url(&self, repo: &Path) -> Result<String, GitError> {
        let repository = Repository::open(repo)?;
        let remote = repository.find_remote(ORIGIN)?;
        remote.url().map(str::to_string).ok_or_else(|| {
            GitError::new(GitFailure::Other, "origin remote URL is not valid UTF-8")
        })
    }
}
