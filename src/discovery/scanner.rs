//! Directory scanning functionality
//!
//! This module finds the subdirectories of the source root.

use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::errors::{Result, enumeration_error};
use crate::utils::is_hidden_file;

use super::filesystem::FileSystem;

/// How candidate entries are selected and ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Sort by path instead of keeping listing order
    pub sort: bool,
    /// Keep entries whose names start with a dot
    pub include_hidden: bool,
}

/// Result of scanning the source root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Subdirectories of the source root, in output order
    pub directories: Vec<PathBuf>,
    /// Number of children the source root listed, before filtering
    pub candidates: usize,
}

/// Lists the immediate subdirectories of `root`
///
/// Files and, unless requested, hidden entries are skipped. Nothing below the
/// first level is visited.
///
/// # Errors
/// Returns an enumeration error if `root` cannot be listed
pub fn scan_directories<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: ScanOptions,
) -> Result<ScanResult> {
    debug!("Scanning directory: {}", root.display());

    let children = fs
        .list_dir(root)
        .map_err(|e| enumeration_error(e, root.to_path_buf()))?;
    let candidates = children.len();

    let mut directories: Vec<PathBuf> = children
        .into_iter()
        .filter(|path| options.include_hidden || !is_hidden_file(path))
        .filter(|path| {
            let keep = fs.is_dir(path);
            if !keep {
                trace!("Skipping non-directory entry: {}", path.display());
            }
            keep
        })
        .collect();

    if options.sort {
        directories.sort();
    }

    debug!(
        "Found {} directories among {} entries",
        directories.len(),
        candidates
    );

    Ok(ScanResult {
        directories,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FixedFileSystem {
        children: Vec<(&'static str, bool)>,
    }

    impl FileSystem for FixedFileSystem {
        fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
            Ok(self
                .children
                .iter()
                .map(|(name, _)| path.join(name))
                .collect())
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.children
                .iter()
                .any(|(name, is_dir)| *is_dir && path.ends_with(name))
        }

        fn write_lines(&self, _path: &Path, _lines: &[String]) -> io::Result<()> {
            unreachable!("scanning never writes")
        }
    }

    fn fixture() -> FixedFileSystem {
        FixedFileSystem {
            children: vec![
                ("b2", true),
                ("readme.txt", false),
                (".thumbs", true),
                ("a1", true),
            ],
        }
    }

    #[test]
    fn test_keeps_directories_in_listing_order() {
        let result = scan_directories(&fixture(), Path::new("/root"), ScanOptions::default())
            .unwrap();

        assert_eq!(
            result.directories,
            vec![PathBuf::from("/root/b2"), PathBuf::from("/root/a1")]
        );
        assert_eq!(result.candidates, 4);
    }

    #[test]
    fn test_sorts_when_requested() {
        let options = ScanOptions {
            sort: true,
            ..ScanOptions::default()
        };
        let result = scan_directories(&fixture(), Path::new("/root"), options).unwrap();

        assert_eq!(
            result.directories,
            vec![PathBuf::from("/root/a1"), PathBuf::from("/root/b2")]
        );
    }

    #[test]
    fn test_includes_hidden_when_requested() {
        let options = ScanOptions {
            include_hidden: true,
            ..ScanOptions::default()
        };
        let result = scan_directories(&fixture(), Path::new("/root"), options).unwrap();

        assert_eq!(result.directories.len(), 3);
        assert!(result.directories.contains(&PathBuf::from("/root/.thumbs")));
    }
}
