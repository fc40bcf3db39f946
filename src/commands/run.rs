//! Run command implementation
//!
//! Loads the remapping table and applies it, printing one line per entry
//! before it is attempted.

use crate::cli::Cli;
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::remap;

use super::helpers;

/// Run the remapping
pub fn run(cli: &Cli) -> Result<()> {
    let settings = helpers::load_settings(cli)?;

    if settings.table.is_empty() {
        println!("No remappings configured.");
        return Ok(());
    }

    let display = ProgressDisplay::new(cli.verbose);
    remap::run(&settings, &display)?;

    Ok(())
}
