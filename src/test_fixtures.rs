//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Creates temp directories, throwaway "upstream" plugin repositories to clone
//! from, and content hashes of package directories.
//!
//! ```ignore
//! let temp = create_temp_dir();
//! let source = create_source_repo(temp.path(), "vim-sample");
//! commit_file(&source, "doc/vim-sample.txt", "*vim-sample*", "Add docs");
//! ```

#![allow(clippy::expect_used)]

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a git repository at `parent/name` holding a single committed
/// `plugin/<name>.vim`, ready to be cloned.
///
/// # Panics
///
/// Panics if the repository cannot be created.
pub fn create_source_repo(parent: &Path, name: &str) -> PathBuf {
    let path = parent.join("upstream").join(name);
    std::fs::create_dir_all(&path).expect("Failed to create source directory");
    Repository::init(&path).expect("Failed to init source repository");
    commit_file(
        &path,
        &format!("plugin/{name}.vim"),
        &format!("\" {name}\nlet g:loaded_{} = 1\n", name.replace('-', "_")),
        "Initial commit",
    );
    path
}

/// Write `content` to `relative` inside the repository and commit it on HEAD.
///
/// # Panics
///
/// Panics if any git operation fails.
pub fn commit_file(repo_path: &Path, relative: &str, content: &str, message: &str) {
    let repo = Repository::open(repo_path).expect("Failed to open repository");

    let full_path = repo_path.join(relative);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&full_path, content).expect("Failed to write file");

    let mut index = repo.index().expect("Failed to open index");
    index
        .add_path(Path::new(relative))
        .expect("Failed to stage file");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");

    let signature =
        Signature::now("prion tests", "tests@prion.invalid").expect("Failed to create signature");
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .expect("Failed to commit");
}

/// BLAKE3 hash over every file below `path`, relative paths included.
///
/// # Panics
///
/// Panics if a file cannot be read.
pub fn hash_directory(path: &Path) -> String {
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();

    let mut hasher = blake3::Hasher::new();
    for file in files {
        let relative = file.strip_prefix(path).unwrap_or(&file);
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update(b"\0");

        let mut content = Vec::new();
        File::open(&file)
            .and_then(|mut f| f.read_to_end(&mut content))
            .expect("Failed to read file");
        hasher.update(&content);
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_source_repo() {
        let temp = create_temp_dir();
        let source = create_source_repo(temp.path(), "vim-sample");

        assert!(source.join(".git").exists());
        assert!(source.join("plugin/vim-sample.vim").is_file());
        let repo = Repository::open(&source).unwrap();
        assert!(repo.head().unwrap().peel_to_commit().is_ok());
    }

    #[test]
    fn test_commit_file_adds_commit() {
        let temp = create_temp_dir();
        let source = create_source_repo(temp.path(), "vim-sample");
        commit_file(&source, "doc/readme.txt", "docs", "Add docs");

        let repo = Repository::open(&source).unwrap();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message(), Some("Add docs"));
        assert_eq!(head.parent_count(), 1);
    }

    #[test]
    fn test_hash_directory_tracks_content() {
        let temp = create_temp_dir();
        std::fs::write(temp.path().join("a.vim"), "one").unwrap();
        let before = hash_directory(temp.path());
        assert_eq!(before, hash_directory(temp.path()));

        std::fs::write(temp.path().join("a.vim"), "two").unwrap();
        assert_ne!(before, hash_directory(temp.path()));
    }
}
