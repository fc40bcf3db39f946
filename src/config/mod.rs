//! Configuration file handling for depremap
//!
//! This module contains data structures for:
//! - `depremap.yaml` / `depremap.json` - the remapping table and install root
//! - [`MappingTable`] - the validated, immutable table a run consumes
//!
//! Loading and root resolution live in [`loader`].

pub mod loader;
pub mod table;

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Result, config as config_error};

// Re-export commonly used types
pub use loader::RunSettings;
pub use table::MappingTable;

/// Default install root, relative to the configuration file
pub const DEFAULT_ROOT: &str = "node_modules";

/// Configuration file contents (`depremap.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemapConfig {
    /// Install root, relative to the configuration file's directory
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Copy OS junk files instead of skipping them
    #[serde(default)]
    pub include_junk: bool,

    /// Ordered source-to-destination remappings
    #[serde(default)]
    pub remappings: Vec<MappingEntry>,
}

/// One `(from, to)` remapping
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingEntry {
    /// Logical package path under the install root (e.g. `@openzeppelin/contracts`)
    pub from: String,

    /// Vendor-qualified path the contents are copied to
    pub to: String,

    /// Globs, relative to `from`, left out of the copy
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[cfg(test)]
impl MappingEntry {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            exclude: Vec::new(),
        }
    }
}

impl RemapConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Parse configuration, picking the format from the file name
    pub fn parse(path: &std::path::Path, content: &str) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json(content)
        } else {
            Self::from_yaml(content)
        };

        parsed.map_err(|e| match e {
            crate::error::RemapError::ConfigParseFailed { reason, .. } => {
                config_error::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }
}
