//! Core library for the foodswap-tools command line application.
//!
//! The library exposes the batch pipelines that power the command-line
//! interface as well as the unit tests. The modules are structured to keep
//! responsibilities narrow and composable: file adapters live under [`io`],
//! data representations inside [`model`], the CSV row conversions in
//! [`flatten`], and the pipeline orchestration under [`sync`].

pub mod error;
pub mod flatten;
pub mod io;
pub mod model;
pub mod paths;
pub mod sync;

pub use error::{Result, ToolError};
