//! Configuration loading functionality
//!
//! This module contains functions for reading the YAML configuration file.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde_yaml::from_str;

use crate::errors::{Result, config_parsing_error};

use super::model::ListerConfig;

/// Loads a configuration from a file
///
/// Paths are expanded and the result is validated.
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<ListerConfig>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<ListerConfig> {
    let content = fs::read_to_string(file).map_err(|e| {
        config_parsing_error(
            e,
            &format!("Failed to read configuration file {}", file.display()),
        )
    })?;

    let mut config = parse_config(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse configuration file {}. Please check the YAML syntax.",
                file.display()
            ),
        )
    })?;

    config.expand_paths()?;
    config.validate()?;

    info!("Loaded configuration from {}", file.display());
    Ok(config)
}

/// Reads the configuration file, falling back to defaults when it is absent
///
/// A missing file is only acceptable when the user did not name it explicitly.
///
/// # Errors
/// Returns an error if an explicitly named file is missing or if loading fails
pub fn read_or_default(file: &Path, explicit: bool) -> Result<ListerConfig> {
    if file.exists() || explicit {
        load_config(file)
    } else {
        debug!(
            "No configuration file at {}, using defaults",
            file.display()
        );
        Ok(ListerConfig::default())
    }
}

fn parse_config(content: &str) -> std::result::Result<ListerConfig, serde_yaml::Error> {
    // An empty document deserializes to unit rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ListerConfig::default());
    }
    from_str(content)
}
