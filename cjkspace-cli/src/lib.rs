//! cjkspace CLI library
//!
//! This library provides the command-line front end for the cjkspace
//! spacing transforms: input resolution, configuration, output
//! formatting and progress reporting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
