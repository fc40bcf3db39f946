//! Check command implementation
//!
//! Validates the remapping table and verifies that every source directory
//! is installed. Reports every problem, never copies anything.

use console::Style;

use crate::cli::Cli;
use crate::error::{Result, fs as fs_error};
use crate::progress::describe_stats;
use crate::remap;

use super::helpers;

/// Run check command
pub fn run(cli: &Cli) -> Result<()> {
    let settings = helpers::load_settings(cli)?;
    let report = remap::check(&settings.root, &settings.table, settings.include_junk)?;

    println!(
        "{} {}",
        Style::new().bold().apply_to("Install root:"),
        settings.root.display()
    );

    for planned in &report.planned {
        println!(
            "  {} {} -> {}: {}",
            Style::new().green().apply_to("ok"),
            planned.from,
            planned.to,
            describe_stats(&planned.stats)
        );
        if cli.verbose {
            println!("      {}", planned.source.display());
            println!("      -> {}", planned.destination.display());
        }
    }

    for problem in &report.problems {
        eprintln!(
            "  {} entry {}: {} -> {}: {}",
            Style::new().red().apply_to("error"),
            problem.index + 1,
            problem.entry.from,
            problem.entry.to,
            problem.error
        );
    }

    if report.is_ok() {
        println!(
            "{} {} remappings ready",
            Style::new().green().bold().apply_to("OK"),
            report.planned.len()
        );
        Ok(())
    } else {
        Err(fs_error::check_failed(
            report.problems.len(),
            settings.table.len(),
        ))
    }
}
