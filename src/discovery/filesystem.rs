//! Filesystem access
//!
//! The lister only touches the disk through [`FileSystem`], which lets tests
//! drive it with synthetic directory trees and injected failures.

use std::fs::{File, read_dir};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The I/O operations a listing run needs
pub trait FileSystem {
    /// Lists the immediate children of `path` as full paths, in listing order
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Whether `path` is a directory, following symbolic links
    fn is_dir(&self, path: &Path) -> bool;

    /// Truncates or creates `path` and writes each line followed by `\n`
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}
