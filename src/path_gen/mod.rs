//! Path generation module
//!
//! This module contains the rewrite from subdirectory paths to model file paths.

mod transformer;

pub use transformer::PathTemplate;
