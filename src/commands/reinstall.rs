//! Reinstall command implementation

use crate::cli::ReinstallArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::{self, display};

/// Run reinstall command
pub fn run(settings: &Settings, args: ReinstallArgs) -> Result<()> {
    let manager = helpers::package_manager(settings);

    let mut progress = ui::reporter();
    progress.begin(&format!("Reinstalling {}", args.names.join(", ")));
    let report = manager.reinstall_all(&args.names);
    progress.finish();

    for entry in &report.entries {
        if let Ok(installed) = &entry.result {
            display::success(format!("Reinstalled {}", installed.name));
        }
    }

    helpers::finish_batch(&report, 0)
}
