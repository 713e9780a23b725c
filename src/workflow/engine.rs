//! Workflow engine
//!
//! This module contains the lister that runs enumerate, filter, transform
//! and write in sequence.

use log::{debug, info};

use crate::config::ListerConfig;
use crate::discovery::{FileSystem, LocalFileSystem, ScanOptions, ScanResult, scan_directories};
use crate::errors::{Result, write_error};
use crate::path_gen::PathTemplate;

use super::context::ListingReport;

/// Builds the model file list for one source root
///
/// All I/O goes through the [`FileSystem`] given at construction. Any
/// failure ends the run; nothing is retried.
#[derive(Debug, Clone)]
pub struct PathLister<F: FileSystem> {
    config: ListerConfig,
    fs: F,
}

impl PathLister<LocalFileSystem> {
    /// Creates a lister working on the local disk
    pub fn local(config: ListerConfig) -> Self {
        PathLister::new(config, LocalFileSystem)
    }
}

impl<F: FileSystem> PathLister<F> {
    pub fn new(config: ListerConfig, fs: F) -> Self {
        PathLister { config, fs }
    }

    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Lists the subdirectories of the source root
    ///
    /// # Errors
    /// Returns an enumeration error if the source root cannot be listed
    pub fn enumerate(&self) -> Result<ScanResult> {
        let options = ScanOptions {
            sort: self.config.sort,
            include_hidden: self.config.include_hidden,
        };
        scan_directories(&self.fs, &self.config.source_root, options)
    }

    /// Derives the output line of every scanned directory
    ///
    /// # Errors
    /// Returns an error if a directory path is not valid unicode
    pub fn transform(&self, scan: &ScanResult) -> Result<Vec<String>> {
        PathTemplate::from(&self.config).apply_all(&scan.directories)
    }

    /// Replaces the output file with `lines`
    ///
    /// # Errors
    /// Returns a write error if the file cannot be created or written. The
    /// file may then be missing, empty or truncated.
    pub fn write(&self, lines: &[String]) -> Result<()> {
        let output_path = &self.config.output_path;
        debug!("Writing {} lines to {}", lines.len(), output_path.display());

        self.fs
            .write_lines(output_path, lines)
            .map_err(|e| write_error(e, output_path.clone()))
    }

    /// Computes the list without writing it
    ///
    /// # Errors
    /// Returns an error if enumeration or transformation fails
    pub fn preview(&self) -> Result<ListingReport> {
        let scan = self.enumerate()?;
        let lines = self.transform(&scan)?;

        Ok(ListingReport {
            entries_scanned: scan.candidates,
            directories: scan.directories.len(),
            lines,
            output_path: None,
        })
    }

    /// Computes the list and writes it to the output file
    ///
    /// The source root is fully scanned before the output file is opened, so
    /// an enumeration failure leaves any previous output untouched.
    ///
    /// # Errors
    /// Returns an error if any step fails
    pub fn run(&self) -> Result<ListingReport> {
        let mut report = self.preview()?;
        self.write(&report.lines)?;
        report.output_path = Some(self.config.output_path.clone());

        info!(
            "Wrote {} entries to {}",
            report.lines.len(),
            self.config.output_path.display()
        );
        Ok(report)
    }
}

/// Writes the model file list for `config` using the local disk
///
/// # Errors
/// Returns an error if the source root cannot be listed or the output file
/// cannot be written
pub fn generate_filelist(config: ListerConfig) -> Result<ListingReport> {
    PathLister::local(config).run()
}
