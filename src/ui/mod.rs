//! Terminal presentation
//!
//! This module handles:
//! - A spinner while packages are cloned or pulled
//! - Styled status lines for batch results (see [`display`])
//!
//! Commands report progress through the [`ProgressReporter`] trait so the
//! spinner can be swapped for a silent reporter when stderr is not a terminal.

pub mod display;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Progress reporter for per-package work.
pub trait ProgressReporter {
    /// Show `message` until [`finish`](Self::finish) is called.
    fn begin(&mut self, message: &str);

    /// Clear the progress display before a result line is printed.
    fn finish(&mut self);
}

/// Spinner on stderr.
pub struct SpinnerReporter {
    pb: Option<ProgressBar>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self { pb: None }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn begin(&mut self, message: &str) {
        self.finish();

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
            pb.set_style(style.tick_strings(TICK_STRINGS));
        }
        pb.set_message(format!("{message}..."));
        pb.enable_steady_tick(Duration::from_millis(80));
        self.pb = Some(pb);
    }

    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

/// No-op reporter for non-interactive runs.
#[derive(Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn begin(&mut self, _message: &str) {}

    fn finish(&mut self) {}
}

/// The reporter matching the current stderr.
pub fn reporter() -> Box<dyn ProgressReporter> {
    if console::Term::stderr().is_term() {
        Box::new(SpinnerReporter::new())
    } else {
        Box::new(SilentReporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_no_ops() {
        let mut reporter = SilentReporter;
        reporter.begin("Installing vim-sensible");
        reporter.finish();
    }

    #[test]
    fn test_spinner_reporter_replaces_spinner() {
        let mut reporter = SpinnerReporter::new();
        reporter.begin("Updating a");
        assert!(reporter.pb.is_some());
        reporter.begin("Updating b");
        assert!(reporter.pb.is_some());
        reporter.finish();
        assert!(reporter.pb.is_none());
    }
}
