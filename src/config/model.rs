//! Configuration data structures
//!
//! This module contains the parameters of a listing run.

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_OFFSET, DEFAULT_OUTPUT_PATH, DEFAULT_PREFIX, DEFAULT_SOURCE_ROOT, DEFAULT_SUFFIX,
};
use crate::errors::{Result, invalid_config_error};
use crate::utils::{expand_path, path_to_string};

/// Parameters of a listing run
///
/// Every field may be omitted from the YAML file; missing fields take the
/// values the generator has always used, so an empty file and no file at all
/// behave the same.
///
/// ```yaml
/// source_root: ~/shapenet/03001627
/// output_path: public/assets/filelist.txt
/// offset: 13
/// prefix: /data
/// sort: true
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ListerConfig {
    /// Directory whose immediate subdirectories are listed
    pub source_root: PathBuf,
    /// Model file location appended to each subdirectory path
    pub suffix: String,
    /// Number of leading characters dropped from `<entry><suffix>`
    ///
    /// This is tied to the length of the part of `source_root` that `prefix`
    /// replaces. Changing one without the other shifts every listed path.
    pub offset: usize,
    /// Literal put in front of what remains after dropping `offset` characters
    pub prefix: String,
    /// File receiving the list
    pub output_path: PathBuf,
    /// Sort entries by path instead of keeping directory listing order
    pub sort: bool,
    /// Keep entries whose names start with a dot
    pub include_hidden: bool,
}

impl Default for ListerConfig {
    fn default() -> Self {
        ListerConfig {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            suffix: DEFAULT_SUFFIX.to_string(),
            offset: DEFAULT_OFFSET,
            prefix: DEFAULT_PREFIX.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sort: false,
            include_hidden: false,
        }
    }
}

impl ListerConfig {
    /// Expands `~` and environment variables in the configured paths
    ///
    /// # Errors
    /// Returns an error if one of the paths is not valid unicode
    pub fn expand_paths(&mut self) -> Result<()> {
        self.source_root = PathBuf::from(expand_path(&path_to_string(&self.source_root)?));
        self.output_path = PathBuf::from(expand_path(&path_to_string(&self.output_path)?));
        Ok(())
    }

    /// Validates the configuration
    ///
    /// An `offset` longer than the source root is allowed, since entries are
    /// still listed, but it is reported because it cuts into entry names.
    ///
    /// # Errors
    /// Returns an error if the source root or output path is empty
    pub fn validate(&self) -> Result<()> {
        if self.source_root.as_os_str().is_empty() {
            return Err(invalid_config_error("source_root must not be empty"));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(invalid_config_error("output_path must not be empty"));
        }

        let root_length = self.source_root.to_string_lossy().chars().count();
        if self.offset > root_length {
            warn!(
                "offset {} is longer than the source root {} ({} characters); \
                 listed paths will lose part of the entry names",
                self.offset,
                self.source_root.display(),
                root_length
            );
        }

        Ok(())
    }
}

/// Values given on the command line, each replacing its configured field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub source_root: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub suffix: Option<String>,
    pub offset: Option<usize>,
    pub prefix: Option<String>,
    pub sort: bool,
    pub include_hidden: bool,
}

impl ConfigOverrides {
    /// Layers the overrides on top of a loaded configuration
    ///
    /// Flags can only switch `sort` and `include_hidden` on.
    pub fn apply(self, config: &mut ListerConfig) {
        if let Some(source_root) = self.source_root {
            config.source_root = source_root;
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if let Some(suffix) = self.suffix {
            config.suffix = suffix;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if let Some(prefix) = self.prefix {
            config.prefix = prefix;
        }
        config.sort |= self.sort;
        config.include_hidden |= self.include_hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_constants() {
        let config = ListerConfig::default();

        assert_eq!(config.source_root, PathBuf::from("/home/ruixuan/03001627"));
        assert_eq!(config.suffix, "/models/model_normalized.obj");
        assert_eq!(config.offset, 13);
        assert_eq!(config.prefix, "/data");
        assert_eq!(config.output_path, PathBuf::from("public/assets/filelist.txt"));
        assert!(!config.sort);
        assert!(!config.include_hidden);
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = ListerConfig {
            source_root: PathBuf::new(),
            ..ListerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ListerConfig {
            output_path: PathBuf::new(),
            ..ListerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_allows_long_offset() {
        let config = ListerConfig {
            source_root: PathBuf::from("/srv"),
            offset: 40,
            ..ListerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut config = ListerConfig::default();
        let overrides = ConfigOverrides {
            source_root: Some(PathBuf::from("/mnt/shapenet/03001627")),
            offset: Some(14),
            sort: true,
            ..ConfigOverrides::default()
        };

        overrides.apply(&mut config);

        assert_eq!(config.source_root, PathBuf::from("/mnt/shapenet/03001627"));
        assert_eq!(config.offset, 14);
        assert!(config.sort);
        assert_eq!(config.prefix, "/data");
        assert_eq!(config.output_path, PathBuf::from("public/assets/filelist.txt"));
        assert!(!config.include_hidden);
    }

    #[test]
    fn test_overrides_keep_configured_flags() {
        let mut config = ListerConfig {
            sort: true,
            ..ListerConfig::default()
        };

        ConfigOverrides::default().apply(&mut config);

        assert!(config.sort);
    }
}
