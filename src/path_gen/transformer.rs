//! Derived path construction
//!
//! Turns a subdirectory path into the path of its model file as the viewer
//! expects to fetch it.

use std::path::PathBuf;

use log::trace;

use crate::config::ListerConfig;
use crate::errors::Result;
use crate::utils::path_to_string;

/// The string rewrite applied to every listed subdirectory
///
/// For an entry `d` the derived path is `prefix + (d + suffix)[offset..]`,
/// where the slice counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use model_filelist::path_gen::PathTemplate;
///
/// let template = PathTemplate::new("/models/model_normalized.obj", 13, "/data");
/// assert_eq!(
///     template.apply("/home/ruixuan/03001627/1a6f615e"),
///     "/data/03001627/1a6f615e/models/model_normalized.obj"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    suffix: String,
    offset: usize,
    prefix: String,
}

impl PathTemplate {
    pub fn new(suffix: &str, offset: usize, prefix: &str) -> Self {
        PathTemplate {
            suffix: suffix.to_string(),
            offset,
            prefix: prefix.to_string(),
        }
    }

    /// Rewrites a single entry path
    ///
    /// The length of `entry` is not checked. If `entry + suffix` has fewer
    /// than `offset` characters only the prefix remains, and a short entry
    /// loses the start of the suffix instead of its own leading characters.
    pub fn apply(&self, entry: &str) -> String {
        let mut derived = self.prefix.clone();
        derived.extend(
            entry
                .chars()
                .chain(self.suffix.chars())
                .skip(self.offset),
        );
        derived
    }

    /// Rewrites every directory, keeping their order
    ///
    /// # Errors
    /// Returns an error if a directory path is not valid unicode
    pub fn apply_all(&self, directories: &[PathBuf]) -> Result<Vec<String>> {
        directories
            .iter()
            .map(|directory| {
                let derived = self.apply(&path_to_string(directory)?);
                trace!("{} -> {}", directory.display(), derived);
                Ok(derived)
            })
            .collect()
    }
}

impl From<&ListerConfig> for PathTemplate {
    fn from(config: &ListerConfig) -> Self {
        PathTemplate::new(&config.suffix, config.offset, &config.prefix)
    }
}
