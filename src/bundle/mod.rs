//! The bundle directory and the packages installed in it
//!
//! Every immediate subdirectory of the bundle root is one installed package;
//! there is no other bookkeeping on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{PrionError, Result, package};

#[derive(Debug, Clone)]
pub struct BundleStore {
    root: PathBuf,
}

impl BundleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured bundle root. Not checked for existence.
    pub fn dir_path(&self) -> &Path {
        &self.root
    }

    /// Names of the installed packages, in directory enumeration order.
    ///
    /// Plain files and hidden entries are not packages and are skipped.
    pub fn packages(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| PrionError::IoError {
            message: format!("Failed to read bundle directory {}: {e}", self.root.display()),
            source: Some(e),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        Ok(names)
    }

    /// `root/name`, without touching the filesystem.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Like [`path_for`](Self::path_for), but refuses names that would escape
    /// the bundle root or address more than one directory level. Hidden names
    /// are refused too, since [`packages`](Self::packages) never lists them.
    pub fn package_path(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None)
                if !name.contains(['/', '\\']) && !name.starts_with('.') =>
            {
                Ok(self.path_for(name))
            }
            _ => Err(package::invalid_name(name)),
        }
    }

    /// Whether `path` exists. Stat failures other than "not found" are errors.
    pub fn is_present(path: &Path) -> Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PrionError::IoError {
                message: format!("Failed to inspect {}: {e}", path.display()),
                source: Some(e),
            }),
        }
    }

    /// Inverse of [`is_present`](Self::is_present).
    pub fn is_missing(path: &Path) -> Result<bool> {
        Self::is_present(path).map(|present| !present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_packages_lists_directories_only() {
        let temp = create_temp_dir();
        fs::create_dir(temp.path().join("vim-surround")).unwrap();
        fs::create_dir(temp.path().join("vim-fugitive")).unwrap();
        fs::create_dir(temp.path().join(".prion-staging")).unwrap();
        fs::write(temp.path().join("README"), "not a package").unwrap();

        let store = BundleStore::new(temp.path());
        let mut packages = store.packages().unwrap();
        packages.sort();

        assert_eq!(packages, vec!["vim-fugitive", "vim-surround"]);
    }

    #[test]
    fn test_packages_empty_root() {
        let temp = create_temp_dir();
        let store = BundleStore::new(temp.path());
        assert!(store.packages().unwrap().is_empty());
    }

    #[test]
    fn test_packages_missing_root_is_io_error() {
        let temp = create_temp_dir();
        let store = BundleStore::new(temp.path().join("missing"));
        assert!(matches!(
            store.packages().unwrap_err(),
            PrionError::IoError { .. }
        ));
    }

    #[test]
    fn test_path_for_is_pure_join() {
        let store = BundleStore::new("/nonexistent/bundle");
        assert_eq!(
            store.path_for("vim-surround"),
            PathBuf::from("/nonexistent/bundle/vim-surround")
        );
        assert_eq!(store.dir_path(), Path::new("/nonexistent/bundle"));
    }

    #[test]
    fn test_package_path_rejects_escaping_names() {
        let store = BundleStore::new("/b");
        for name in ["", ".", "..", "../etc", "a/b", "/abs", ".prion-staging", ".dotfiles"] {
            assert!(
                matches!(
                    store.package_path(name),
                    Err(PrionError::InvalidPackageName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
        assert!(store.package_path("vim-surround").is_ok());
    }

    #[test]
    fn test_presence_probes() {
        let temp = create_temp_dir();
        let present = temp.path().join("present");
        fs::create_dir(&present).unwrap();
        let missing = temp.path().join("missing");

        assert!(BundleStore::is_present(&present).unwrap());
        assert!(!BundleStore::is_missing(&present).unwrap());
        assert!(BundleStore::is_missing(&missing).unwrap());
        assert!(!BundleStore::is_present(&missing).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_presence_probe_propagates_non_not_found_errors() {
        let temp = create_temp_dir();
        let file = temp.path().join("file");
        fs::write(&file, "x").unwrap();

        // A path through a regular file fails with ENOTDIR, not ENOENT.
        let err = BundleStore::is_present(&file.join("child")).unwrap_err();
        assert!(matches!(err, PrionError::IoError { .. }));
    }
}
