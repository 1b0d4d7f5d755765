//! The user's vimrc: appending lines and opening it in an editor

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{PrionError, Result, config, fs as fs_error};

/// Editor used when `EDITOR` is unset or empty.
pub const DEFAULT_EDITOR: &str = "vim";

#[derive(Debug, Clone)]
pub struct Vimrc {
    path: PathBuf,
}

impl Vimrc {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` as a line of its own. The vimrc must already exist.
    pub fn append(&self, text: &str) -> Result<()> {
        let needs_separator = match fs::read(&self.path) {
            Ok(content) => !content.is_empty() && !content.ends_with(b"\n"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(config::vimrc_not_found(self.path.display().to_string()));
            }
            Err(e) => return Err(self.write_failed(e)),
        };

        let mut line = String::with_capacity(text.len() + 2);
        if needs_separator {
            line.push('\n');
        }
        line.push_str(text);
        if !text.ends_with('\n') {
            line.push('\n');
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => config::vimrc_not_found(self.path.display().to_string()),
                _ => self.write_failed(e),
            })?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.write_failed(e))?;
        debug!(path = %self.path.display(), "appended to vimrc");
        Ok(())
    }

    /// Run `editor` on the vimrc and wait for it, sharing this terminal.
    ///
    /// `editor` may carry arguments, as in `EDITOR="code --wait"`.
    pub fn edit(&self, editor: &str) -> Result<()> {
        let mut words = editor.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| config::editor_failed(editor, "no editor command given"))?;

        debug!(editor, path = %self.path.display(), "opening vimrc in editor");
        let status = Command::new(program)
            .args(words)
            .arg(&self.path)
            .status()
            .map_err(|e| config::editor_failed(editor, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(config::editor_failed(editor, format!("exited with {status}")))
        }
    }

    fn write_failed(&self, e: std::io::Error) -> PrionError {
        fs_error::write_failed(self.path.display().to_string(), e.to_string())
    }
}

/// The editor named by `EDITOR`, or [`DEFAULT_EDITOR`].
pub fn preferred_editor() -> String {
    editor_or_default(std::env::var("EDITOR").ok())
}

fn editor_or_default(value: Option<String>) -> String {
    value
        .filter(|editor| !editor.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}
