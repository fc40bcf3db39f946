//! CLI definitions using clap derive API
//!
//! Running `depremap` without a subcommand is the same as `depremap run`.
//! Argument types for subcommands that take any live in submodules:
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;

pub use completions::CompletionsArgs;

/// depremap - copy installed dependencies to their remapped paths
#[derive(Parser, Debug)]
#[command(
    name = "depremap",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copy installed dependencies to their remapped vendor paths",
    long_about = "depremap reads a remapping table (depremap.yaml) and merge-copies each installed \
                  package directory to the path another toolchain expects, e.g. \
                  @openzeppelin/contracts to OpenZeppelin/openzeppelin-contracts@4.3.2/contracts. \
                  Run it after the package installer has finished.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  depremap                          \x1b[90m# Apply depremap.yaml in the current directory\x1b[0m\n   \
                  depremap -c ci/remap.yaml         \x1b[90m# Use another remapping table\x1b[0m\n   \
                  depremap -r vendor/node_modules   \x1b[90m# Override the install root\x1b[0m\n   \
                  depremap check                    \x1b[90m# Validate without copying\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Remapping table (defaults to depremap.yaml, depremap.yml or depremap.json in the current directory)
    #[arg(long, short = 'c', global = true, env = "DEPREMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Install root the remapping keys are resolved under (overrides `root` in the table)
    #[arg(long, short = 'r', global = true, env = "DEPREMAP_ROOT")]
    pub root: Option<PathBuf>,

    /// Print every copied file
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy every remapped dependency (default)
    Run,

    /// Validate the table and check every source is installed, without copying
    Check,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
