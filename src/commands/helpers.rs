//! Command helper utilities

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::RunSettings;
use crate::error::{Result, fs as fs_error};

/// Current working directory, which relative `--config`/`--root` values resolve against
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {}", e)))
}

/// Load run settings from the global CLI options
pub fn load_settings(cli: &Cli) -> Result<RunSettings> {
    let cwd = current_dir()?;
    RunSettings::load(cli.config.as_deref(), cli.root.as_deref(), &cwd)
}
