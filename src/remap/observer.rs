//! Progress reporting seam between the executor and the console

use std::path::Path;

use crate::common::fs::CopyStats;
use crate::config::MappingEntry;
use crate::error::RemapError;

use super::RunSummary;

/// Receives progress events from a run, in order
pub trait RunObserver {
    fn run_started(&self, _total: usize) {}

    /// Called before the entry is attempted
    fn entry_started(&self, index: usize, total: usize, entry: &MappingEntry);

    fn file_copied(&self, _entry: &MappingEntry, _relative: &Path) {}

    fn entry_finished(&self, index: usize, entry: &MappingEntry, stats: &CopyStats);

    fn entry_failed(&self, _index: usize, _entry: &MappingEntry, _error: &RemapError) {}

    fn run_finished(&self, _summary: &RunSummary) {}
}

/// Observer that ignores every event
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

#[cfg(test)]
impl RunObserver for NoopObserver {
    fn entry_started(&self, _index: usize, _total: usize, _entry: &MappingEntry) {}

    fn entry_finished(&self, _index: usize, _entry: &MappingEntry, _stats: &CopyStats) {}
}
