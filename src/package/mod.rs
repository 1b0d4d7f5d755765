//! Package lifecycle: install, reinstall, remove, update
//!
//! A package only ever becomes visible in the bundle root through a single
//! rename of a fully cloned staging directory, so other readers of the bundle
//! root see either no package or a complete checkout.
//!
//! ## Install
//!
//! ```text
//! stage (unique dir under staging root)
//!   -> clone into stage        failure: delete stage, CloneFailed
//!   -> [reinstall] remove old  failure: delete stage, propagate
//!   -> rename stage -> bundle  failure: delete stage, propagate
//! ```
//!
//! When deleting the staging directory itself fails, that error is returned
//! in place of the one that triggered the cleanup.

pub mod batch;
pub mod name;


use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempDir;
use tracing::{debug, warn};

use crate::bundle::BundleStore;
use crate::error::{PrionError, Result, fs as fs_error, package};
use crate::git::{GitFailure, PullStatus, VersionControl};

pub use batch::{BatchReport, run_batch};
pub use name::derive_name;

/// An installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    /// `None` when the checkout has no readable `origin`.
    pub source_url: Option<String>,
    pub installed_path: PathBuf,
}

/// A completed install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    pub name: String,
    pub path: PathBuf,
    /// An existing checkout was replaced.
    pub replaced: bool,
}

/// Outcome of updating one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate,
    Updated,
    /// The pull did not happen, and the user has to act before it can.
    Degraded(DegradedReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedReason {
    /// The checkout lacks the history needed to merge, typically because it
    /// was cloned shallow.
    ShallowHistory,
    /// The remote's SSH host key differs from the one in `known_hosts`.
    RemoteAuthMismatch { host: Option<String> },
}

impl DegradedReason {
    /// What the user can do about it.
    pub fn guidance(&self, name: &str) -> String {
        match self {
            DegradedReason::ShallowHistory => format!(
                "{name} is having trouble updating. This happens when a package was \
                 installed as a shallow clone and needs repairing.\n\
                 Reinstall it to fetch a fresh copy:\n\n    prion reinstall {name}"
            ),
            DegradedReason::RemoteAuthMismatch { host } => {
                let host = host.as_deref().unwrap_or("github.com");
                let known_hosts = dirs::home_dir()
                    .map(|home| home.join(".ssh").join("known_hosts"))
                    .map_or_else(
                        || "~/.ssh/known_hosts".to_string(),
                        |p| p.display().to_string(),
                    );
                format!(
                    "{name} cannot connect to its remote host over ssh: the host key of \
                     {host} does not match the one trusted locally.\n\
                     If the host rotated its key or offers a different key type, refresh \
                     your known hosts:\n\n    ssh-keyscan -H {host} >> {known_hosts}"
                )
            }
        }
    }
}

/// Drives package transitions over a [`BundleStore`] with a [`VersionControl`]
/// client. Never writes to the terminal.
pub struct PackageManager<V> {
    store: BundleStore,
    vcs: V,
    staging_root: PathBuf,
}

impl<V: VersionControl> PackageManager<V> {
    pub fn new(store: BundleStore, vcs: V, staging_root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            vcs,
            staging_root: staging_root.into(),
        }
    }

    pub fn store(&self) -> &BundleStore {
        &self.store
    }

    /// Install the package at `url`.
    ///
    /// An installed package of the same name is an `AlreadyInstalled` error
    /// unless `force` is set, in which case it is replaced once the new clone
    /// has succeeded.
    pub fn install(&self, url: &str, force: bool) -> Result<Installed> {
        let name = derive_name(url)?;
        let target = self.store.package_path(&name)?;

        let replace = BundleStore::is_present(&target)?;
        if replace && !force {
            return Err(package::already_installed(name));
        }

        self.install_from(url, &name, &target, replace)
    }

    /// Replace `name` with a fresh clone of its own origin.
    ///
    /// The existing checkout is only removed after the new clone succeeded.
    pub fn reinstall(&self, name: &str) -> Result<Installed> {
        let target = self.installed_path(name)?;
        let url = self
            .vcs
            .remote_url(&target)
            .map_err(|e| package::remote_unavailable(name, e.message))?;
        debug!(name, url = %url, "reinstalling from origin");

        self.install_from(&url, name, &target, true)
    }

    /// Delete the package directory.
    pub fn remove(&self, name: &str) -> Result<()> {
        let target = self.installed_path(name)?;
        debug!(name, path = %target.display(), "removing package");
        fs::remove_dir_all(&target).map_err(|e| PrionError::IoError {
            message: format!("Failed to remove {}: {e}", target.display()),
            source: Some(e),
        })
    }

    /// Pull the package from its origin.
    ///
    /// Shallow-history and host-key problems are returned as
    /// [`UpdateOutcome::Degraded`]; every other pull failure is an error.
    pub fn update(&self, name: &str) -> Result<UpdateOutcome> {
        let target = self.installed_path(name)?;
        debug!(name, "updating package");

        match self.vcs.pull(&target) {
            Ok(PullStatus::UpToDate) => Ok(UpdateOutcome::UpToDate),
            Ok(PullStatus::Updated) => Ok(UpdateOutcome::Updated),
            Err(err) => match err.kind {
                GitFailure::ShallowHistory => {
                    warn!(name, reason = %err.message, "update degraded: shallow history");
                    Ok(UpdateOutcome::Degraded(DegradedReason::ShallowHistory))
                }
                GitFailure::HostKeyMismatch { host } => {
                    warn!(name, reason = %err.message, "update degraded: host key mismatch");
                    Ok(UpdateOutcome::Degraded(
                        DegradedReason::RemoteAuthMismatch { host },
                    ))
                }
                _ => Err(package::pull_failed(name, err.message)),
            },
        }
    }

    /// Describe an installed package.
    pub fn package(&self, name: &str) -> Result<Package> {
        let installed_path = self.installed_path(name)?;
        let source_url = self.vcs.remote_url(&installed_path).ok();
        Ok(Package {
            name: name.to_string(),
            source_url,
            installed_path,
        })
    }

    /// Describe every installed package, in bundle enumeration order.
    pub fn packages(&self) -> Result<Vec<Package>> {
        self.store
            .packages()?
            .iter()
            .map(|name| self.package(name))
            .collect()
    }

    pub fn install_all(&self, urls: &[String], force: bool) -> BatchReport<Installed> {
        run_batch(urls, |url| self.install(url, force))
    }

    pub fn reinstall_all(&self, names: &[String]) -> BatchReport<Installed> {
        run_batch(names, |name| self.reinstall(name))
    }

    pub fn remove_all(&self, names: &[String]) -> BatchReport<()> {
        run_batch(names, |name| self.remove(name))
    }

    pub fn update_all(&self, names: &[String]) -> BatchReport<UpdateOutcome> {
        run_batch(names, |name| self.update(name))
    }

    fn installed_path(&self, name: &str) -> Result<PathBuf> {
        let path = self.store.package_path(name)?;
        if BundleStore::is_missing(&path)? {
            return Err(package::not_installed(name));
        }
        Ok(path)
    }

    fn install_from(&self, url: &str, name: &str, target: &Path, replace: bool) -> Result<Installed> {
        let staging = self.stage(name)?;
        debug!(name, url, staging = %staging.path().display(), "cloning into staging");

        if let Err(err) = self.vcs.clone_repo(url, staging.path()) {
            discard(staging)?;
            return Err(package::clone_failed(url, err.message));
        }

        if replace {
            if let Err(err) = self.remove(name) {
                discard(staging)?;
                return Err(err);
            }
        }

        fs::create_dir_all(self.store.dir_path())?;
        let staged = staging.keep();
        if let Err(e) = fs::rename(&staged, target) {
            fs::remove_dir_all(&staged).map_err(|cleanup| {
                fs_error::staging_failed(staged.display().to_string(), cleanup.to_string())
            })?;
            return Err(PrionError::IoError {
                message: format!(
                    "Failed to move {} into {}: {e}",
                    name,
                    self.store.dir_path().display()
                ),
                source: Some(e),
            });
        }
        debug!(name, path = %target.display(), replace, "package installed");

        Ok(Installed {
            name: name.to_string(),
            path: target.to_path_buf(),
            replaced: replace,
        })
    }

    /// A fresh, uniquely named staging directory for `name`.
    fn stage(&self, name: &str) -> Result<TempDir> {
        let staging_failed =
            |e: std::io::Error| fs_error::staging_failed(self.staging_root.display().to_string(), e.to_string());

        fs::create_dir_all(&self.staging_root).map_err(staging_failed)?;
        tempfile::Builder::new()
            .prefix(&format!("{name}-"))
            .tempdir_in(&self.staging_root)
            .map_err(staging_failed)
    }
}

/// Delete a staging directory, reporting failure instead of ignoring it.
fn discard(staging: TempDir) -> Result<()> {
    let path = staging.path().display().to_string();
    staging.close().map_err(|e| {
        warn!(path = %path, error = %e, "failed to clean up staging directory");
        fs_error::staging_failed(path, e.to_string())
    })
}
