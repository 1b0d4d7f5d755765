//! Command helper utilities

use std::io::IsTerminal;

use inquire::Confirm;

use crate::bundle::BundleStore;
use crate::config::Settings;
use crate::error::{PrionError, Result};
use crate::git::Git2Client;
use crate::package::{BatchReport, PackageManager};
use crate::ui::display;

/// The package manager over libgit2 for `settings`.
pub fn package_manager(settings: &Settings) -> PackageManager<Git2Client> {
    PackageManager::new(
        BundleStore::new(&settings.bundle_dir),
        Git2Client::new(),
        &settings.staging_dir,
    )
}

/// Whether the user can answer a prompt.
pub fn can_prompt() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Ask whether the installed package `name` should be replaced.
pub fn confirm_replace(name: &str) -> Result<bool> {
    let answer = Confirm::new(&format!("{name} is already installed. Replace it?"))
        .with_default(false)
        .with_help_message("The current checkout is removed once the new clone succeeds")
        .prompt()?;
    Ok(answer)
}

/// Print what went wrong in `report`, and turn any failure into an error.
///
/// `degraded` counts items that succeeded but still need the user to act.
pub fn finish_batch<T>(report: &BatchReport<T>, degraded: usize) -> Result<()> {
    display::print_failures(report);

    if report.is_success() && degraded == 0 {
        return Ok(());
    }
    let failed = report.failure_count() + report.skipped.len() + degraded;
    Err(PrionError::BatchIncomplete {
        failed,
        total: report.entries.len() + report.skipped.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{fs, package};
    use crate::package::run_batch;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_finish_batch_success() {
        let report = run_batch(&items(&["a", "b"]), |_| Ok(()));
        assert!(finish_batch(&report, 0).is_ok());
    }

    #[test]
    fn test_finish_batch_counts_failures_and_skipped() {
        let report = run_batch(&items(&["a", "b", "c", "d"]), |name| match name {
            "a" => Err(package::not_installed(name)),
            "b" => Err(fs::io_error("disk full")),
            _ => Ok(()),
        });

        let err = finish_batch(&report, 0).unwrap_err();
        match err {
            PrionError::BatchIncomplete { failed, total } => {
                assert_eq!(failed, 4);
                assert_eq!(total, 4);
            }
            other => panic!("Expected BatchIncomplete, got {other:?}"),
        }
    }

    #[test]
    fn test_finish_batch_degraded_is_failure() {
        let report = run_batch(&items(&["a"]), |_| Ok(()));
        let err = finish_batch(&report, 1).unwrap_err();
        assert!(matches!(
            err,
            PrionError::BatchIncomplete {
                failed: 1,
                total: 1
            }
        ));
    }
}
