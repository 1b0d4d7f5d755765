//! Remove command implementation

use crate::cli::RemoveArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::display;

/// Run remove command
pub fn run(settings: &Settings, args: RemoveArgs) -> Result<()> {
    let manager = helpers::package_manager(settings);
    let report = manager.remove_all(&args.names);

    for entry in &report.entries {
        if entry.result.is_ok() {
            display::success(format!("Removed {}", entry.item));
        }
    }

    helpers::finish_batch(&report, 0)
}
