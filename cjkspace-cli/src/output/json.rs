//! JSON output formatter

use super::{OutputFormatter, SpacedDocument};
use anyhow::Result;
use cjkspace_core::Metadata;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// The spaced text
    pub text: String,
    /// Processing metadata
    pub metadata: Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &SpacedDocument) -> Result<()> {
        self.documents.push(DocumentData {
            source: document.source.clone(),
            text: document.output.text.clone(),
            metadata: document.output.metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
