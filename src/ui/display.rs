//! Display functions for packages and batch results

use console::Style;
use miette::Diagnostic;

use crate::error::PrionError;
use crate::package::{BatchReport, Package, UpdateOutcome};

/// Display a package in simple format.
pub fn display_package_simple(package: &Package) {
    println!("{}", package.name);
}

/// Display a package with its origin and location.
pub fn display_package_detailed(package: &Package) {
    println!("  {}", Style::new().bold().yellow().apply_to(&package.name));
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Source:"),
        package.source_url.as_deref().unwrap_or("(unknown)")
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Path:"),
        package.installed_path.display()
    );
}

/// A green check line for a completed item.
pub fn success(message: impl AsRef<str>) {
    println!("{} {}", Style::new().green().apply_to("✓"), message.as_ref());
}

/// A yellow advisory block on stderr.
pub fn advisory(message: impl AsRef<str>) {
    eprintln!("{}", Style::new().yellow().for_stderr().apply_to(message.as_ref()));
}

/// One line per update result.
pub fn update_line(name: &str, outcome: &UpdateOutcome) -> String {
    match outcome {
        UpdateOutcome::UpToDate => format!("{name} is up to date"),
        UpdateOutcome::Updated => format!("{name} updated"),
        UpdateOutcome::Degraded(_) => format!("{name} could not be updated"),
    }
}

/// `Error: <message>` followed by the diagnostic help, if any.
pub fn format_error(err: &PrionError) -> String {
    let mut out = format!("Error: {err}");
    if let Some(help) = err.help() {
        out.push_str(&format!("\n  help: {help}"));
    }
    out
}

pub fn print_error(err: &PrionError) {
    eprintln!("{}", Style::new().red().for_stderr().apply_to(format_error(err)));
}

/// Print every failure of `report` and the items a fatal failure skipped.
pub fn print_failures<T>(report: &BatchReport<T>) {
    for (_, err) in report.failures() {
        print_error(err);
    }
    if !report.skipped.is_empty() {
        eprintln!(
            "{} {}",
            Style::new().bold().for_stderr().apply_to("Skipped:"),
            report.skipped.join(", ")
        );
    }
}
