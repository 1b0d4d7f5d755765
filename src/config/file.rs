//! The settings file (`config.yaml`)
//!
//! ```yaml
//! bundle_dir: ~/.vim/bundle
//! vimrc_path: ~/.vimrc
//! staging_dir: ~/.vim/.prion-staging
//! ```
//!
//! Every key is optional.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{PrionError, Result, config};

/// Directory under the user's config directory holding `config.yaml`.
const CONFIG_DIR: &str = "prion";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub bundle_dir: Option<PathBuf>,
    #[serde(default)]
    pub vimrc_path: Option<PathBuf>,
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

impl SettingsFile {
    /// Parse settings from YAML. An empty document means "all defaults".
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| config::parse_failed(origin.display().to_string(), e.to_string()))
    }

    /// Load `path`. A missing file is an error only when `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "loaded settings file");
                Self::from_yaml(&content, path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(config::not_found(path.display().to_string()))
            }
            Err(e) => Err(PrionError::IoError {
                message: format!("Failed to read {}: {e}", path.display()),
                source: Some(e),
            }),
        }
    }
}

/// `<config dir>/prion/config.yaml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
