//! Input handling module
//!
//! Text comes from files (with glob support), a literal `--text` argument,
//! or standard input when neither is given.

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::io;

/// A piece of input text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// Raw text as read
    pub text: String,
}

/// Where input text is taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Files or glob patterns
    Patterns(Vec<String>),
    /// Literal text from the command line
    Text(String),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Pick the source from the command-line arguments
    pub fn from_args(patterns: &[String], text: Option<&str>) -> Self {
        match text {
            Some(text) => InputSource::Text(text.to_string()),
            None if !patterns.is_empty() => InputSource::Patterns(patterns.to_vec()),
            None => InputSource::Stdin,
        }
    }

    /// Read every document this source names
    pub fn read_documents(&self) -> Result<Vec<Document>> {
        match self {
            InputSource::Patterns(patterns) => resolve_patterns(patterns)?
                .into_iter()
                .map(|path| -> Result<Document> {
                    Ok(Document {
                        source: path.display().to_string(),
                        text: FileReader::read_text(&path)?,
                    })
                })
                .collect(),
            InputSource::Text(text) => Ok(vec![Document {
                source: "<text>".to_string(),
                text: text.clone(),
            }]),
            InputSource::Stdin => Ok(vec![Document {
                source: "<stdin>".to_string(),
                text: FileReader::read_all(io::stdin().lock())?,
            }]),
        }
    }
}
