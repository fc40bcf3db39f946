//! Entry filtering for the merge-copy
//!
//! Two kinds of entries are skipped while walking a source tree:
//! - OS junk files (`.DS_Store`, `Thumbs.db`, editor swap files, ...), matched on the entry name
//! - user `exclude` globs, matched on the path relative to the source root
//!
//! Dotfiles are never skipped on their own.

use std::ffi::OsStr;
use std::path::Path;

use wax::{CandidatePath, Glob, Pattern};

use crate::path_utils::to_forward_slashes;

/// Names generated by operating systems and editors that are never copied
/// unless `include_junk` is set
pub const JUNK_PATTERNS: &[&str] = &[
    ".DS_Store",
    "._*",
    ".*.swp",
    "*~",
    "Thumbs.db",
    "ehthumbs.db",
    "Desktop.ini",
    "npm-debug.log",
    "__MACOSX",
    ".Spotlight-V100",
    ".Trashes",
    ".AppleDouble",
    ".LSOverride",
    "@eaDir",
    "Icon\r",
];

enum NamePattern {
    Glob(Glob<'static>),
    Exact(&'static str),
}

impl NamePattern {
    fn compile(pattern: &'static str) -> Self {
        match Glob::new(pattern) {
            Ok(glob) => NamePattern::Glob(glob.into_owned()),
            Err(_) => NamePattern::Exact(pattern),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Glob(glob) => glob.matched(&CandidatePath::from(name)).is_some(),
            NamePattern::Exact(exact) => *exact == name,
        }
    }
}

/// Decides which entries under a source directory are left out of the copy
pub struct EntryFilter {
    junk: Vec<NamePattern>,
    excludes: Vec<Glob<'static>>,
}

impl EntryFilter {
    /// Build a filter from user exclude globs.
    ///
    /// Returns the offending pattern and reason if a glob does not compile.
    pub fn new(excludes: &[String], include_junk: bool) -> Result<Self, String> {
        let junk = if include_junk {
            Vec::new()
        } else {
            JUNK_PATTERNS
                .iter()
                .map(|p| NamePattern::compile(*p))
                .collect()
        };

        let excludes = excludes
            .iter()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(Glob::into_owned)
                    .map_err(|e| format!("invalid exclude pattern '{}': {}", pattern, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { junk, excludes })
    }

    /// Check that every pattern compiles, without keeping the filter
    pub fn validate_excludes(excludes: &[String]) -> Result<(), String> {
        Self::new(excludes, true).map(|_| ())
    }

    /// Whether an entry name is OS junk
    pub fn is_junk(&self, name: &OsStr) -> bool {
        let Some(name) = name.to_str() else {
            return false;
        };
        self.junk.iter().any(|p| p.matches(name))
    }

    /// Whether a path relative to the source root matches an exclude glob
    pub fn is_excluded(&self, relative: &Path) -> bool {
        if self.excludes.is_empty() {
            return false;
        }
        let path_str = to_forward_slashes(relative);
        let candidate = CandidatePath::from(path_str.as_str());
        self.excludes
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }

    /// Whether an entry should be left out of the copy
    pub fn skips(&self, relative: &Path) -> bool {
        let junk = relative.file_name().is_some_and(|name| self.is_junk(name));
        junk || self.is_excluded(relative)
    }
}
