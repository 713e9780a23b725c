//! Directory discovery module
//!
//! This module contains the filesystem abstraction and the scan of the
//! source root.

mod filesystem;
mod scanner;

pub use filesystem::{FileSystem, LocalFileSystem};
pub use scanner::{ScanOptions, ScanResult, scan_directories};
