use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the model list generator
#[derive(Debug)]
pub enum Error {
    /// The source root could not be listed
    Enumeration { source: io::Error, path: PathBuf },
    /// The output file could not be created, truncated or written
    Write { source: io::Error, path: PathBuf },
    /// A candidate path cannot be represented as UTF-8 text
    InvalidPath { path: PathBuf },
    /// The configuration file could not be read or parsed
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// The configuration was parsed but holds unusable values
    InvalidConfig { detail: String },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Enumeration { source, path } => {
                write!(f, "Failed to list directory {}: {source}", path.display())
            }
            Error::Write { source, path } => {
                write!(f, "Failed to write file {}: {source}", path.display())
            }
            Error::InvalidPath { path } => {
                write!(f, "Path is not valid unicode: {}", path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidConfig { detail } => {
                write!(f, "Invalid configuration: {detail}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Enumeration { source, .. } => Some(source),
            Error::Write { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Custom Result type for the model list generator
///
/// # Examples
/// ```
/// use model_filelist::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an enumeration error
pub fn enumeration_error(err: io::Error, path: PathBuf) -> Error {
    Error::Enumeration { source: err, path }
}

/// Helper function to create a write error
pub fn write_error(err: io::Error, path: PathBuf) -> Error {
    Error::Write { source: err, path }
}

/// Helper function to create an invalid path error
pub fn invalid_path_error(path: PathBuf) -> Error {
    Error::InvalidPath { path }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid config error
pub fn invalid_config_error(detail: &str) -> Error {
    Error::InvalidConfig {
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
