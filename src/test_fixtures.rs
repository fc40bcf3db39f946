//! Test fixtures for building install-root trees with a single call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_install_root, write_tree, snapshot_tree};
//!
//! #[test]
//! fn my_test() {
//!     let (temp, root) = create_install_root();
//!     write_tree(&root, &[("pkgA/lib/x.txt", "hello")]);
//!     let before = snapshot_tree(&root.join("pkgA"));
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

/// Absolute base for temp dirs, so a relative TMPDIR never lands them under
/// the directory the tests run from.
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        t
    } else if cfg!(windows) {
        std::env::var("TEMP")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a temp directory holding an empty `node_modules` install root.
///
/// Returns the `TempDir` (which cleans up on drop) and the canonical root path.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_install_root() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let root = temp.path().join("node_modules");
    std::fs::create_dir_all(&root).expect("Failed to create install root");
    let root = dunce::canonicalize(&root).expect("Failed to canonicalize install root");
    (temp, root)
}

/// Create files under `base` from (relative path, content) pairs.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn write_tree(base: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = base.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Read every file under `base` into a map of forward-slash relative path to bytes.
///
/// # Panics
///
/// Panics if the tree cannot be read.
#[must_use]
pub fn snapshot_tree(base: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(base)
        .into_iter()
        .map(|e| e.expect("Failed to walk tree"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(base).expect("Entry outside base");
            (
                crate::path_utils::to_forward_slashes(relative),
                std::fs::read(e.path()).expect("Failed to read file"),
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_install_root() {
        let (temp, root) = create_install_root();
        assert!(root.is_dir());
        assert!(root.ends_with("node_modules"));
        drop(temp);
        assert!(!root.exists());
    }

    #[test]
    fn test_write_and_snapshot_tree() {
        let temp = create_temp_dir();
        write_tree(temp.path(), &[("a.txt", "a"), ("nested/b.txt", "b")]);

        let snapshot = snapshot_tree(temp.path());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["a.txt"], b"a");
        assert_eq!(snapshot["nested/b.txt"], b"b");
    }
}
