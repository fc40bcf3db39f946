//! Recursive merge-copy with unified error handling
//!
//! Every entry under the source is copied to the same relative path under the
//! destination. Existing destination entries are overwritten, directories
//! present on both sides are merged, and destination content with no source
//! counterpart is left alone. Symbolic links are followed and their targets
//! materialized.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::common::filter::EntryFilter;
use crate::error::{Result, fs as fs_error};

/// Counts of what a merge-copy transferred
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    /// Files written
    pub files: u64,
    /// Directories created or merged, not counting the destination root
    pub directories: u64,
    /// Bytes written
    pub bytes: u64,
    /// Entries left out as junk or excluded (a skipped directory counts once)
    pub skipped: u64,
}

/// Copy a directory tree into `dst`, merging with whatever is already there.
///
/// `on_file` is called with each file's path relative to `src` after it is written.
pub fn merge_copy_dir<F>(
    src: &Path,
    dst: &Path,
    filter: &EntryFilter,
    mut on_file: F,
) -> Result<CopyStats>
where
    F: FnMut(&Path),
{
    let mut stats = CopyStats::default();
    let mut skipped = 0u64;

    prepare_dir(dst)?;

    let walker = WalkDir::new(src)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
            let skip = filter.skips(relative);
            if skip {
                skipped += 1;
            }
            !skip
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            fs_error::copy_failed(&path, e)
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| fs_error::copy_failed(entry.path(), e))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            prepare_dir(&target)?;
            stats.directories += 1;
        } else {
            stats.bytes += copy_file(entry.path(), &target)?;
            stats.files += 1;
            on_file(relative);
        }
    }

    stats.skipped = skipped;
    Ok(stats)
}

/// Count what [`merge_copy_dir`] would transfer, without writing anything
pub fn plan_copy_dir(src: &Path, filter: &EntryFilter) -> Result<CopyStats> {
    let mut stats = CopyStats::default();
    let mut skipped = 0u64;

    let walker = WalkDir::new(src)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
            let skip = filter.skips(relative);
            if skip {
                skipped += 1;
            }
            !skip
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            fs_error::copy_failed(&path, e)
        })?;

        if entry.file_type().is_dir() {
            stats.directories += 1;
        } else {
            let metadata = entry
                .metadata()
                .map_err(|e| fs_error::copy_failed(entry.path(), e))?;
            stats.bytes += metadata.len();
            stats.files += 1;
        }
    }

    stats.skipped = skipped;
    Ok(stats)
}

/// Make sure `path` is a real directory, replacing a file or link in the way
fn prepare_dir(path: &Path) -> Result<()> {
    if let Ok(meta) = fs::symlink_metadata(path) {
        if meta.is_dir() {
            return Ok(());
        }
        fs::remove_file(path).map_err(|e| fs_error::copy_failed(path, e))?;
    }
    fs::create_dir_all(path).map_err(|e| fs_error::copy_failed(path, e))
}

/// Copy a single file over whatever occupies `target`, returning bytes written
fn copy_file(source: &Path, target: &Path) -> Result<u64> {
    if let Ok(meta) = fs::symlink_metadata(target) {
        if meta.is_dir() {
            fs::remove_dir_all(target).map_err(|e| fs_error::copy_failed(target, e))?;
        } else {
            // Removing first replaces links instead of writing through them
            clear_readonly(target, &meta)?;
            fs::remove_file(target).map_err(|e| fs_error::copy_failed(target, e))?;
        }
    } else if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error::copy_failed(parent, e))?;
    }

    fs::copy(source, target).map_err(|e| fs_error::copy_failed(source, e))
}

/// Windows refuses to delete read-only files, and `fs::copy` carries the
/// read-only bit over from the source, so a second run would fail without this.
/// Unix only needs write access to the parent directory.
#[cfg(windows)]
#[allow(clippy::permissions_set_readonly_false)]
fn clear_readonly(path: &Path, meta: &fs::Metadata) -> Result<()> {
    if meta.file_type().is_symlink() || !meta.permissions().readonly() {
        return Ok(());
    }
    let mut permissions = meta.permissions();
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions).map_err(|e| fs_error::copy_failed(path, e))
}

#[cfg(not(windows))]
#[allow(clippy::unnecessary_wraps)]
fn clear_readonly(_path: &Path, _meta: &fs::Metadata) -> Result<()> {
    Ok(())
}
