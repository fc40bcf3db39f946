//! Configuration loading and install root resolution
//!
//! Everything a run needs is read once here and handed to the executor as
//! an explicit [`RunSettings`] value.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, config as config_error, fs as fs_error};

use super::{DEFAULT_ROOT, MappingTable, RemapConfig};

/// Configuration file names looked up in the working directory, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["depremap.yaml", "depremap.yml", "depremap.json"];

/// A parsed configuration file and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: RemapConfig,
}

impl LoadedConfig {
    /// Directory relative paths in the file are resolved against
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Immutable inputs for one run
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Canonical install root every key is resolved under
    pub root: PathBuf,
    pub table: MappingTable,
    pub include_junk: bool,
}

impl RunSettings {
    /// Load, validate, and resolve everything a run needs.
    ///
    /// `config_path` and `root_override` come from the command line or
    /// environment; relative values are taken from `cwd`.
    pub fn load(config_path: Option<&Path>, root_override: Option<&Path>, cwd: &Path) -> Result<Self> {
        let loaded = load_config(config_path, cwd)?;
        let table = MappingTable::new(loaded.config.remappings.clone())?;
        let root = resolve_root(&loaded, root_override, cwd)?;

        Ok(Self {
            root,
            table,
            include_junk: loaded.config.include_junk,
        })
    }
}

/// Find the first known configuration file in `dir`
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Read and parse the configuration file.
///
/// An explicit path must exist; otherwise the working directory is searched.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(config_error::not_found(path.display().to_string()));
            }
            path
        }
        None => find_config(cwd).ok_or_else(|| {
            config_error::not_found(cwd.join(CONFIG_FILE_NAMES[0]).display().to_string())
        })?,
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;

    let config = RemapConfig::parse(&path, &content)?;
    Ok(LoadedConfig { path, config })
}

/// Resolve the install root.
///
/// Precedence: `root_override` (relative to `cwd`), then `root` from the file
/// (relative to the file's directory), then `node_modules` beside the file.
/// The root must be an existing directory and is returned canonicalized.
pub fn resolve_root(loaded: &LoadedConfig, root_override: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let candidate = match (root_override, &loaded.config.root) {
        (Some(root), _) => cwd.join(root),
        (None, Some(root)) => loaded.base_dir().join(root),
        (None, None) => loaded.base_dir().join(DEFAULT_ROOT),
    };

    if !candidate.is_dir() {
        return Err(fs_error::root_not_found(&candidate));
    }

    dunce::canonicalize(&candidate).map_err(|_| fs_error::root_not_found(&candidate))
}
