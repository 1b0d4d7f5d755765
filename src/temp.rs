//! Locations for temporary and staging directories.

use std::env;
use std::path::{Path, PathBuf};

/// Name of the staging directory kept next to the bundle directory.
pub const STAGING_DIR_NAME: &str = ".prion-staging";

/// Returns an absolute directory suitable for creating temporary directories,
/// even when `TMPDIR` is relative.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        return t;
    }

    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Default root for install staging directories.
///
/// A sibling of the bundle directory keeps staging on the same filesystem so
/// the final rename stays atomic, while staying out of the bundle listing.
pub fn default_staging_dir(bundle_dir: &Path) -> PathBuf {
    match bundle_dir.parent() {
        Some(parent) => parent.join(STAGING_DIR_NAME),
        None => temp_dir_base().join("prion-staging"),
    }
}
