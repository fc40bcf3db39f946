//! Validated mapping table
//!
//! A [`MappingTable`] is built once from configuration and never changes
//! afterwards. Every structural problem is caught here, before any copy starts.

use std::collections::HashMap;

use crate::common::filter::EntryFilter;
use crate::error::{Result, config as config_error};
use crate::path_utils::{check_relative_key, key_components, keys_overlap};

use super::MappingEntry;

/// Ordered, validated sequence of remappings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// Validate entries and build the table.
    ///
    /// Rejects empty, absolute, or escaping keys, duplicate sources, colliding
    /// destinations, entries whose source and destination overlap, and
    /// exclude globs that do not compile. All problems are reported at once.
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self> {
        let problems = validate(&entries);
        if !problems.is_empty() {
            return Err(config_error::invalid(problems.join("; ")));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn validate(entries: &[MappingEntry]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut sources: HashMap<Vec<String>, usize> = HashMap::new();
    let mut destinations: HashMap<Vec<String>, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let n = index + 1;
        let from_ok = check_key(n, "from", &entry.from, &mut problems);
        let to_ok = check_key(n, "to", &entry.to, &mut problems);

        if from_ok {
            if let Some(first) = sources.insert(key_components(&entry.from), n) {
                problems.push(format!(
                    "entry {n}: duplicate source '{}' (first used by entry {first})",
                    entry.from
                ));
            }
        }

        if to_ok {
            if let Some(first) = destinations.insert(key_components(&entry.to), n) {
                problems.push(format!(
                    "entry {n}: destination '{}' collides with entry {first}",
                    entry.to
                ));
            }
        }

        if from_ok && to_ok && keys_overlap(&entry.from, &entry.to) {
            problems.push(format!(
                "entry {n}: source '{}' and destination '{}' overlap",
                entry.from, entry.to
            ));
        }

        if let Err(reason) = EntryFilter::validate_excludes(&entry.exclude) {
            problems.push(format!("entry {n}: {reason}"));
        }
    }

    problems
}

fn check_key(n: usize, field: &str, key: &str, problems: &mut Vec<String>) -> bool {
    match check_relative_key(key) {
        Ok(()) => true,
        Err(reason) => {
            problems.push(format!("entry {n}: '{field}' {reason}"));
            false
        }
    }
}
