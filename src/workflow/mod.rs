//! Workflow module
//!
//! This module contains the components that orchestrate a listing run.

mod context;
mod engine;

pub use context::ListingReport;
pub use engine::{PathLister, generate_filelist};
