//! Console progress for remap runs

use std::path::Path;

use console::{Style, Term};
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};

use crate::common::fs::CopyStats;
use crate::config::MappingEntry;
use crate::error::RemapError;
use crate::path_utils::to_forward_slashes;
use crate::remap::{RunObserver, RunSummary};

/// Progress display for remap runs
///
/// Entry announcements are always printed; the bar itself only shows up when
/// stdout is a terminal.
pub struct ProgressDisplay {
    entry_pb: ProgressBar,
    verbose: bool,
}

impl ProgressDisplay {
    pub fn new(verbose: bool) -> Self {
        let entry_pb = if Term::stdout().is_term() {
            let style = ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .map(|s| s.progress_chars("#>-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            let pb = ProgressBar::new(0);
            pb.set_style(style);
            pb
        } else {
            ProgressBar::hidden()
        };

        Self { entry_pb, verbose }
    }

    /// Print a line without tearing the bar
    fn print(&self, line: &str) {
        self.entry_pb.suspend(|| println!("{}", line));
    }
}

impl RunObserver for ProgressDisplay {
    fn run_started(&self, total: usize) {
        self.entry_pb.set_length(total as u64);
    }

    fn entry_started(&self, _index: usize, _total: usize, entry: &MappingEntry) {
        self.print(&format!(
            "Copy {} to {}",
            Style::new().bold().yellow().apply_to(&entry.from),
            Style::new().bold().yellow().apply_to(&entry.to)
        ));
        self.entry_pb.set_message(entry.from.clone());
    }

    fn file_copied(&self, _entry: &MappingEntry, relative: &Path) {
        if self.verbose {
            self.print(&format!(
                "  {}",
                Style::new().dim().apply_to(to_forward_slashes(relative))
            ));
        }
    }

    fn entry_finished(&self, _index: usize, _entry: &MappingEntry, stats: &CopyStats) {
        self.print(&format!(
            "  {} {}",
            Style::new().green().apply_to("✓"),
            describe_stats(stats)
        ));
        self.entry_pb.inc(1);
    }

    fn entry_failed(&self, _index: usize, _entry: &MappingEntry, _error: &RemapError) {
        self.entry_pb.abandon();
    }

    fn run_finished(&self, summary: &RunSummary) {
        self.entry_pb.finish_and_clear();
        let totals = summary.totals();
        println!(
            "{} {} {} ({} files)",
            Style::new().green().bold().apply_to("Remapped"),
            summary.entries.len(),
            plural(summary.entries.len() as u64, "entry", "entries"),
            totals.files
        );
    }
}

/// One-line description of what an entry copied
pub fn describe_stats(stats: &CopyStats) -> String {
    let mut line = format!(
        "{} {}, {} {} ({})",
        stats.files,
        plural(stats.files, "file", "files"),
        stats.directories,
        plural(stats.directories, "directory", "directories"),
        HumanBytes(stats.bytes)
    );
    if stats.skipped > 0 {
        line.push_str(&format!(", {} skipped", stats.skipped));
    }
    line
}

fn plural(count: u64, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
