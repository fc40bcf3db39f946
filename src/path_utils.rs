//! Cross-platform path utilities for mapping keys
//!
//! Mapping keys are relative path fragments such as `@openzeppelin/contracts`
//! or `OpenZeppelin/openzeppelin-contracts@4.3.2/contracts`. They are always
//! written with `/` in configuration files and resolved under the install root.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes.
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new(r"lib\x.txt"));
/// assert_eq!(forward, "lib/x.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check that a mapping key stays inside the install root.
///
/// Returns a short reason when the key is empty, absolute, or contains
/// `.`/`..` components.
pub fn check_relative_key(key: &str) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err("key is empty".to_string());
    }

    let path = Path::new(key);
    for component in path.components() {
        match component {
            Component::Normal(_) => {}
            Component::RootDir | Component::Prefix(_) => {
                return Err("key must be relative to the install root".to_string());
            }
            Component::ParentDir => {
                return Err("key must not contain '..'".to_string());
            }
            Component::CurDir => {
                return Err("key must not contain '.'".to_string());
            }
        }
    }

    if key.starts_with('/') || key.starts_with('\\') {
        return Err("key must be relative to the install root".to_string());
    }

    Ok(())
}

/// Normalized component list of a key, used for comparisons
pub fn key_components(key: &str) -> Vec<String> {
    Path::new(key)
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Whether two keys name the same directory or one contains the other.
///
/// Copying between overlapping directories would recurse into its own output.
pub fn keys_overlap(a: &str, b: &str) -> bool {
    let a = key_components(a);
    let b = key_components(b);
    let shared = a.len().min(b.len());
    a[..shared] == b[..shared]
}

/// Resolve a key under the install root
pub fn resolve_key(root: &Path, key: &str) -> PathBuf {
    key_components(key)
        .iter()
        .fold(root.to_path_buf(), |acc, part| acc.join(part))
}
