//! Processor facade: configuration, mode selection and output types

mod config;
mod mode;
mod output;
mod processor;

pub use config::{Config, ConfigBuilder};
pub use mode::SpacingMode;
pub use output::{Metadata, Output};
pub use processor::Spacer;
