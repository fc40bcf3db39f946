//! Remap executor
//!
//! Applies every `(from, to)` pair of a [`MappingTable`] as a recursive
//! merge-copy under the install root, strictly in table order. The first
//! failing entry stops the run; nothing already copied is rolled back.
//!
//! The executor never prints or exits. Progress goes to a [`RunObserver`]
//! and failures come back as [`RemapError::EntryFailed`].

pub mod observer;

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::filter::EntryFilter;
use crate::common::fs::{CopyStats, merge_copy_dir, plan_copy_dir};
use crate::config::loader::RunSettings;
use crate::config::{MappingEntry, MappingTable};
use crate::error::{RemapError, Result, config as config_error, fs as fs_error};
use crate::path_utils::resolve_key;

#[cfg(test)]
pub use observer::NoopObserver;
pub use observer::RunObserver;

/// Outcome of one successfully synchronized entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub from: String,
    pub to: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub stats: CopyStats,
}

/// Outcome of a successful run, one report per entry in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: Vec<EntryReport>,
}

impl RunSummary {
    /// Stats summed over all entries
    pub fn totals(&self) -> CopyStats {
        self.entries
            .iter()
            .fold(CopyStats::default(), |mut acc, entry| {
                acc.files += entry.stats.files;
                acc.directories += entry.stats.directories;
                acc.bytes += entry.stats.bytes;
                acc.skipped += entry.stats.skipped;
                acc
            })
    }
}

/// Synchronize every entry of the table, stopping at the first failure.
///
/// The observer hears about each entry before it is attempted, so the
/// failing pair is visible even without the returned error.
pub fn run(settings: &RunSettings, observer: &dyn RunObserver) -> Result<RunSummary> {
    let root = &settings.root;
    if !root.is_dir() {
        return Err(fs_error::root_not_found(root));
    }

    let total = settings.table.len();
    observer.run_started(total);

    let mut summary = RunSummary::default();
    for (index, entry) in settings.table.iter().enumerate() {
        observer.entry_started(index, total, entry);

        match sync_entry(root, entry, settings.include_junk, |relative| {
            observer.file_copied(entry, relative);
        }) {
            Ok(report) => {
                observer.entry_finished(index, entry, &report.stats);
                summary.entries.push(report);
            }
            Err(cause) => {
                observer.entry_failed(index, entry, &cause);
                return Err(fs_error::entry_failed(
                    index,
                    entry.from.as_str(),
                    entry.to.as_str(),
                    cause,
                ));
            }
        }
    }

    observer.run_finished(&summary);
    Ok(summary)
}

/// Synchronize a single entry: resolve both keys and merge-copy source into destination.
///
/// A missing source, or a destination that symlinks back into the source,
/// fails before the destination is touched.
pub fn sync_entry<F>(root: &Path, entry: &MappingEntry, include_junk: bool, on_file: F) -> Result<EntryReport>
where
    F: FnMut(&Path),
{
    let source = resolve_key(root, &entry.from);
    let destination = resolve_key(root, &entry.to);

    ensure_source_dir(&source)?;
    ensure_disjoint(&source, &destination)?;

    let filter = EntryFilter::new(&entry.exclude, include_junk).map_err(config_error::invalid)?;
    let stats = merge_copy_dir(&source, &destination, &filter, on_file)?;

    Ok(EntryReport {
        from: entry.from.clone(),
        to: entry.to.clone(),
        source,
        destination,
        stats,
    })
}

/// Problem found by [`check`] for one entry
#[derive(Debug)]
pub struct EntryProblem {
    pub index: usize,
    pub entry: MappingEntry,
    pub error: RemapError,
}

/// Result of checking a table against the install root without copying
#[derive(Debug, Default)]
pub struct CheckReport {
    /// What each healthy entry would copy
    pub planned: Vec<EntryReport>,
    /// Every entry that would fail
    pub problems: Vec<EntryProblem>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Verify every source exists and is walkable, reporting all problems.
///
/// Never writes to the filesystem.
pub fn check(root: &Path, table: &MappingTable, include_junk: bool) -> Result<CheckReport> {
    if !root.is_dir() {
        return Err(fs_error::root_not_found(root));
    }

    let mut report = CheckReport::default();
    for (index, entry) in table.iter().enumerate() {
        match plan_entry(root, entry, include_junk) {
            Ok(planned) => report.planned.push(planned),
            Err(error) => report.problems.push(EntryProblem {
                index,
                entry: entry.clone(),
                error,
            }),
        }
    }
    Ok(report)
}

fn plan_entry(root: &Path, entry: &MappingEntry, include_junk: bool) -> Result<EntryReport> {
    let source = resolve_key(root, &entry.from);
    let destination = resolve_key(root, &entry.to);

    ensure_source_dir(&source)?;
    ensure_disjoint(&source, &destination)?;

    let filter = EntryFilter::new(&entry.exclude, include_junk).map_err(config_error::invalid)?;
    let stats = plan_copy_dir(&source, &filter)?;

    Ok(EntryReport {
        from: entry.from.clone(),
        to: entry.to.clone(),
        source,
        destination,
        stats,
    })
}

fn ensure_source_dir(source: &Path) -> Result<()> {
    match fs::metadata(source) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(fs_error::source_missing(source)),
    }
}

/// Reject a destination that, after following symlinks, lies inside the
/// source or contains it. Keys are checked lexically when the table is
/// built; this catches links already on disk.
fn ensure_disjoint(source: &Path, destination: &Path) -> Result<()> {
    let real_source =
        dunce::canonicalize(source).map_err(|_| fs_error::source_missing(source))?;
    let real_destination = resolve_existing_prefix(destination)?;

    if real_destination.starts_with(&real_source) || real_source.starts_with(&real_destination) {
        return Err(fs_error::paths_overlap(&real_source, &real_destination));
    }
    Ok(())
}

/// Canonicalize the deepest existing ancestor of `path` and re-append the
/// components that do not exist yet
fn resolve_existing_prefix(path: &Path) -> Result<PathBuf> {
    let mut missing: Vec<std::ffi::OsString> = Vec::new();
    let mut current = path;
    loop {
        if current.exists() {
            let mut resolved =
                dunce::canonicalize(current).map_err(|e| fs_error::copy_failed(current, e))?;
            resolved.extend(missing.iter().rev());
            return Ok(resolved);
        }
        match (current.file_name(), current.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return Ok(path.to_path_buf()),
        }
    }
}
