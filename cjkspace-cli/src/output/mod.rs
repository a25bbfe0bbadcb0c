//! Output formatting module

use anyhow::Result;
use cjkspace_core::Output;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transformed document ready for formatting
#[derive(Debug, Clone)]
pub struct SpacedDocument {
    /// Where the text came from (file path, `<text>` or `<stdin>`)
    pub source: String,
    /// Result of the spacer
    pub output: Output,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document
    fn format_document(&mut self, document: &SpacedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Spaced text only
    #[default]
    Text,
    /// JSON array of documents with metadata
    Json,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "spaced text, one block per input",
            OutputFormat::Json => "JSON array with text and processing metadata",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.pad("text"),
            OutputFormat::Json => f.pad("json"),
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
