//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{load_config, read_or_default};
pub use model::{ConfigOverrides, ListerConfig};
