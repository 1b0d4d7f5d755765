//! Common test utilities for prion integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use git2::{Repository, Signature};
use tempfile::TempDir;

/// An isolated home with a bundle directory, vimrc and upstream repositories.
pub struct TestEnv {
    pub temp: TempDir,
    /// Stands in for `$HOME` so nothing touches the real user's files.
    pub home: PathBuf,
    pub bundle_dir: PathBuf,
    pub vimrc: PathBuf,
    pub staging_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self {
            bundle_dir: home.join(".vim").join("bundle"),
            vimrc: home.join(".vimrc"),
            staging_dir: home.join(".vim").join(".prion-staging"),
            home,
            temp,
        }
    }

    /// The binary with paths pointing into this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--bundle-dir")
            .arg(&self.bundle_dir)
            .arg("--vimrc")
            .arg(&self.vimrc);
        cmd
    }

    /// The binary with a clean environment but no path flags.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("prion").expect("Failed to find prion binary");
        for var in [
            "VIM_BUNDLE_DIR",
            "VIMRC_PATH",
            "PRION_CONFIG",
            "PRION_STAGING_DIR",
            "PRION_LOG",
            "EDITOR",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home);
        cmd.env("XDG_CONFIG_HOME", self.home.join(".config"));
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }

    /// Create an upstream repository holding `plugin/<name>.vim`.
    pub fn create_upstream(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join("upstream").join(name);
        std::fs::create_dir_all(&path).expect("Failed to create upstream directory");
        Repository::init(&path).expect("Failed to init upstream repository");
        commit_file(
            &path,
            &format!("plugin/{name}.vim"),
            &format!("\" {name} v1\n"),
            "Initial commit",
        );
        path
    }

    /// Path of `relative` inside installed package `name`.
    pub fn package_file(&self, name: &str, relative: &str) -> PathBuf {
        self.bundle_dir.join(name).join(relative)
    }

    pub fn read_package_file(&self, name: &str, relative: &str) -> String {
        std::fs::read_to_string(self.package_file(name, relative))
            .expect("Failed to read package file")
    }

    /// Entries left in the staging directory.
    pub fn staging_entries(&self) -> Vec<String> {
        match std::fs::read_dir(&self.staging_dir) {
            Ok(entries) => entries
                .map(|e| {
                    e.expect("Failed to read staging entry")
                        .file_name()
                        .to_string_lossy()
                        .into_owned()
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn write_vimrc(&self, content: &str) {
        std::fs::write(&self.vimrc, content).expect("Failed to write vimrc");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `content` to `relative` inside `repo_path` and commit it on HEAD.
pub fn commit_file(repo_path: &Path, relative: &str, content: &str, message: &str) {
    let repo = Repository::open(repo_path).expect("Failed to open repository");
    let file_path = repo_path.join(relative);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&file_path, content).expect("Failed to write file");

    let mut index = repo.index().expect("Failed to get index");
    index
        .add_path(Path::new(relative))
        .expect("Failed to add file to index");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let sig = Signature::now("Test", "test@example.com").expect("Failed to create signature");

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Failed to commit");
}

/// URL form of a local path as passed on the command line.
pub fn url_of(path: &Path) -> String {
    path.display().to_string()
}
