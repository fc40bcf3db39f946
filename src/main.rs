//! depremap - dependency path remapping
//!
//! Copies installed dependency directories (e.g. `node_modules/@openzeppelin/contracts`)
//! to the vendor-qualified paths another toolchain resolves
//! (e.g. `node_modules/OpenZeppelin/openzeppelin-contracts@4.3.2/contracts`),
//! driven by a declarative remapping table.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod path_utils;
mod progress;
mod remap;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::RemapError;

/// Print an error and its help line to stderr
fn report_error(err: &RemapError) {
    eprintln!("Error: {}", err);
    if let Some(help) = err.help_text() {
        eprintln!("  help: {}", help);
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        None | Some(Commands::Run) => commands::run::run(&cli),
        Some(Commands::Check) => commands::check::run(&cli),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}
