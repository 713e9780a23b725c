//! Workflow context
//!
//! This module defines what a listing run reports back.

use std::path::PathBuf;

/// Summary of a listing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingReport {
    /// Number of children the source root listed
    pub entries_scanned: usize,
    /// Number of those children that are listed subdirectories
    pub directories: usize,
    /// The derived paths, in output order
    pub lines: Vec<String>,
    /// Where the list was written, `None` for a dry run
    pub output_path: Option<PathBuf>,
}

impl ListingReport {
    /// Number of entries skipped as files or hidden names
    pub fn skipped(&self) -> usize {
        self.entries_scanned - self.directories
    }

    /// Whether the list was only computed, not written
    pub fn is_dry_run(&self) -> bool {
        self.output_path.is_none()
    }
}
