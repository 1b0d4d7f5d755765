//! Install command implementation
//!
//! Installs each URL in order. Plugins that turn out to be installed already
//! are offered for replacement afterwards, unless `--force` or `--yes` was
//! given (replace without asking) or nobody is there to answer (report
//! `AlreadyInstalled`).

use crate::cli::InstallArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::{PrionError, Result};
use crate::git::VersionControl;
use crate::package::{BatchReport, Installed, PackageManager};
use crate::ui::{self, display};

/// Run install command
pub fn run(settings: &Settings, args: InstallArgs) -> Result<()> {
    let manager = helpers::package_manager(settings);
    let force = args.replace_without_asking();

    let mut progress = ui::reporter();
    progress.begin(&format!("Installing {}", batch_label(&args.urls)));
    let mut report = manager.install_all(&args.urls, force);
    progress.finish();

    if !force && helpers::can_prompt() {
        for url in confirm_replacements(&manager, &mut report)? {
            println!("Skipped {url}");
        }
    }

    for entry in &report.entries {
        match &entry.result {
            Ok(installed) if installed.replaced => {
                display::success(format!("Reinstalled {}", installed.name));
            }
            Ok(installed) => display::success(format!("Installed {}", installed.name)),
            Err(_) => {}
        }
    }

    helpers::finish_batch(&report, 0)
}

fn batch_label(urls: &[String]) -> String {
    match urls {
        [url] => url.clone(),
        _ => format!("{} packages", urls.len()),
    }
}

/// Names of packages the batch found already installed, with their URLs.
fn already_installed<T>(report: &BatchReport<T>) -> Vec<(String, String)> {
    report
        .entries
        .iter()
        .filter_map(|entry| match &entry.result {
            Err(PrionError::AlreadyInstalled { name }) => Some((entry.item.clone(), name.clone())),
            _ => None,
        })
        .collect()
}

/// Ask about each already installed package and replace the confirmed ones.
///
/// Declined packages are dropped from `report`; their URLs are returned.
fn confirm_replacements<V: VersionControl>(
    manager: &PackageManager<V>,
    report: &mut BatchReport<Installed>,
) -> Result<Vec<String>> {
    let mut declined = Vec::new();
    for (url, name) in already_installed(report) {
        if !helpers::confirm_replace(&name)? {
            declined.push(url);
            continue;
        }
        let mut progress = ui::reporter();
        progress.begin(&format!("Reinstalling {name}"));
        let result = manager.install(&url, true);
        progress.finish();
        if let Some(entry) = report.entries.iter_mut().find(|entry| entry.item == url) {
            entry.result = result;
        }
    }
    report.entries.retain(|entry| !declined.contains(&entry.item));
    Ok(declined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::package;
    use crate::package::run_batch;

    #[test]
    fn test_batch_label() {
        assert_eq!(batch_label(&["https://h/o/a.git".to_string()]), "https://h/o/a.git");
        assert_eq!(
            batch_label(&["a".to_string(), "b".to_string()]),
            "2 packages"
        );
    }

    #[test]
    fn test_already_installed_picks_only_conflicts() {
        let urls: Vec<String> = ["https://h/o/a.git", "https://h/o/b.git", "https://h/o/c"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let report = run_batch(&urls, |url| match url {
            "https://h/o/a.git" => Err(package::already_installed("a")),
            "https://h/o/b.git" => Err(package::clone_failed(url, "Repository not found")),
            _ => Ok(()),
        });

        assert_eq!(
            already_installed(&report),
            vec![("https://h/o/a.git".to_string(), "a".to_string())]
        );
    }
}
