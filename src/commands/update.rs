//! Update command implementation
//!
//! Degraded updates do not stop the batch. Their guidance is printed with the
//! results and they make the command exit with a failure.

use crate::bundle::BundleStore;
use crate::cli::UpdateArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::package::UpdateOutcome;
use crate::ui::{self, display};

/// Run update command
pub fn run(settings: &Settings, args: UpdateArgs) -> Result<()> {
    let manager = helpers::package_manager(settings);

    let names = if args.all && BundleStore::is_missing(manager.store().dir_path())? {
        Vec::new()
    } else if args.all {
        let mut names = manager.store().packages()?;
        names.sort();
        names
    } else {
        args.names
    };

    if names.is_empty() {
        println!("No packages installed.");
        return Ok(());
    }

    let mut progress = ui::reporter();
    progress.begin(&format!("Updating {} package(s)", names.len()));
    let report = manager.update_all(&names);
    progress.finish();

    let mut degraded = 0;
    for entry in &report.entries {
        match &entry.result {
            Ok(outcome @ UpdateOutcome::Degraded(reason)) => {
                degraded += 1;
                display::advisory(display::update_line(&entry.item, outcome));
                display::advisory(reason.guidance(&entry.item));
            }
            Ok(outcome) => display::success(display::update_line(&entry.item, outcome)),
            Err(_) => {}
        }
    }

    helpers::finish_batch(&report, degraded)
}
