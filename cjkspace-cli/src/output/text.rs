//! Plain text output formatter

use super::{OutputFormatter, SpacedDocument};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs each document's spaced text
///
/// Documents are separated by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &SpacedDocument) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", document.output.text)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
