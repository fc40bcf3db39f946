//! Error types and handling for depremap
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructors are grouped by area:
//! - [`config`]: Mapping table loading and validation errors
//! - [`fs`]: Install root and copy errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for depremap operations
#[derive(Error, Diagnostic, Debug)]
pub enum RemapError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(depremap::config::not_found),
        help("Create depremap.yaml in the current directory or pass --config <path>")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(depremap::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(depremap::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(depremap::config::invalid),
        help("Fix the remappings table; no directories were copied")
    )]
    ConfigInvalid { message: String },

    // Install root errors
    #[error("Install root not found: {path}")]
    #[diagnostic(
        code(depremap::root::not_found),
        help("Run the package installer first, or point --root at the installed packages")
    )]
    RootNotFound { path: String },

    // Copy errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(depremap::copy::source_missing),
        help("Check the mapping key and that the package installer has run")
    )]
    SourceMissing { path: String },

    #[error("Copy failed at {path}: {reason}")]
    #[diagnostic(code(depremap::copy::failed))]
    CopyFailed { path: String, reason: String },

    #[error("Destination {destination} resolves into source {source_path} (or the reverse)")]
    #[diagnostic(
        code(depremap::copy::paths_overlap),
        help("A symlink under the install root links the destination and the source; remove it or change the mapping")
    )]
    PathsOverlap {
        source_path: String,
        destination: String,
    },

    #[error("Failed to copy {from} to {to} (entry {}): {cause}", .index + 1)]
    #[diagnostic(code(depremap::run::entry_failed))]
    EntryFailed {
        index: usize,
        from: String,
        to: String,
        #[source]
        cause: Box<RemapError>,
    },

    // Check errors
    #[error("{failed} of {total} remappings cannot be applied")]
    #[diagnostic(
        code(depremap::check::failed),
        help("Run the package installer for missing sources, then fix any remaining remappings listed above")
    )]
    CheckFailed { failed: usize, total: usize },

    #[error("IO error: {message}")]
    #[diagnostic(code(depremap::fs::io_error))]
    IoError { message: String },
}

impl RemapError {
    /// The innermost cause, unwrapping any entry context
    pub fn root_cause(&self) -> &RemapError {
        match self {
            RemapError::EntryFailed { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// Help text for this error, falling through entry context to the cause
    pub fn help_text(&self) -> Option<String> {
        self.root_cause().help().map(|h| h.to_string())
    }
}

impl From<std::io::Error> for RemapError {
    fn from(err: std::io::Error) -> Self {
        RemapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RemapError {
    fn from(err: serde_yaml::Error) -> Self {
        RemapError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RemapError {
    fn from(err: serde_json::Error) -> Self {
        RemapError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RemapError>;
