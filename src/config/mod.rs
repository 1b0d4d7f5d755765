//! Runtime settings
//!
//! Settings are resolved once at startup and passed down explicitly. Each
//! value comes from the first source that provides it:
//!
//! 1. command-line flags and their environment variables
//!    (`VIM_BUNDLE_DIR`, `VIMRC_PATH`, `PRION_STAGING_DIR`)
//! 2. the settings file (`--config`, `$PRION_CONFIG`, or
//!    `<config dir>/prion/config.yaml`)
//! 3. built-in defaults (`~/.vim/bundle`, `~/.vimrc`)
//!
//! A leading `~` is expanded in every path, and relative paths are made
//! absolute against the working directory.

pub mod file;

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Result, config};
use crate::temp;

pub use file::{SettingsFile, default_config_path};

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub bundle_dir: Option<PathBuf>,
    pub vimrc_path: Option<PathBuf>,
    pub staging_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding one subdirectory per package.
    pub bundle_dir: PathBuf,
    pub vimrc_path: PathBuf,
    /// Where clones are staged before being moved into the bundle directory.
    pub staging_dir: PathBuf,
}

impl Settings {
    /// Read the settings file, then apply overrides and defaults.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let file = match &overrides.config_file {
            Some(path) => SettingsFile::load(&expand_tilde(path), true)?,
            None => match default_config_path() {
                Some(path) => SettingsFile::load(&path, false)?,
                None => SettingsFile::default(),
            },
        };
        Self::resolve(file, overrides)
    }

    /// Merge an already loaded settings file with overrides and defaults.
    pub fn resolve(file: SettingsFile, overrides: &Overrides) -> Result<Self> {
        let bundle_dir = match overrides.bundle_dir.clone().or(file.bundle_dir) {
            Some(path) => make_absolute(expand_tilde(&path))?,
            None => home_path(&[".vim", "bundle"])?,
        };
        let vimrc_path = match overrides.vimrc_path.clone().or(file.vimrc_path) {
            Some(path) => make_absolute(expand_tilde(&path))?,
            None => home_path(&[".vimrc"])?,
        };
        let staging_dir = match overrides.staging_dir.clone().or(file.staging_dir) {
            Some(path) => make_absolute(expand_tilde(&path))?,
            None => temp::default_staging_dir(&bundle_dir),
        };

        let settings = Self {
            bundle_dir,
            vimrc_path,
            staging_dir,
        };
        settings.validate()?;
        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.bundle_dir.as_os_str().is_empty() {
            return Err(config::invalid("bundle directory must not be empty"));
        }
        if self.vimrc_path.as_os_str().is_empty() {
            return Err(config::invalid("vimrc path must not be empty"));
        }
        if self.staging_dir.starts_with(&self.bundle_dir) {
            return Err(config::invalid(format!(
                "staging directory {} must be outside the bundle directory {}",
                self.staging_dir.display(),
                self.bundle_dir.display()
            )));
        }
        Ok(())
    }
}

/// Replace a leading `~` component with the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Empty paths are left alone for validation to reject.
fn make_absolute(path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() || path.is_absolute() {
        return Ok(path);
    }
    std::path::absolute(&path).map_err(|e| {
        config::invalid(format!("could not resolve {}: {e}", path.display()))
    })
}

fn home_path(parts: &[&str]) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        config::invalid("could not determine the home directory; set the paths explicitly")
    })?;
    Ok(parts.iter().fold(home, |path, part| path.join(part)))
}
