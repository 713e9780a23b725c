//! Generates the list of model files a 3D viewer loads.
//!
//! The source root holds one directory per model. For each of them the
//! generator writes `prefix + (directory + suffix)[offset..]` to the output
//! file, one path per line.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod path_gen;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{ConfigOverrides, ListerConfig, load_config, read_or_default};
    pub use crate::discovery::{FileSystem, LocalFileSystem};
    pub use crate::errors::{
        config_parsing_error, enumeration_error, generic_error, invalid_config_error,
        invalid_path_error, write_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::path_gen::PathTemplate;
    pub use crate::workflow::{ListingReport, PathLister, generate_filelist};
}
