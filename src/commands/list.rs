//! List command implementation
//!
//! This command lists installed packages, optionally with their origins and
//! paths, or as JSON.

use console::Style;

use crate::bundle::BundleStore;
use crate::cli::ListArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::package::Package;
use crate::ui::display;

/// Run list command
pub fn run(settings: &Settings, args: ListArgs) -> Result<()> {
    let manager = helpers::package_manager(settings);
    let mut packages = if BundleStore::is_missing(manager.store().dir_path())? {
        Vec::new()
    } else {
        manager.packages()?
    };
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    list_packages(&packages, args.detailed);
    Ok(())
}

fn list_packages(packages: &[Package], detailed: bool) {
    if packages.is_empty() {
        println!("No packages installed.");
        return;
    }

    if !detailed {
        for package in packages {
            display::display_package_simple(package);
        }
        return;
    }

    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Installed packages ({}):", packages.len()))
    );
    println!();
    for package in packages {
        display::display_package_detailed(package);
        println!();
    }
}
