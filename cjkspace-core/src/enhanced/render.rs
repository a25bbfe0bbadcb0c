//! Rendering and whitespace cleanup for the enhanced spacer

use crate::classify::is_tight_punctuation;
use crate::error::{Result, SpacingError};

use super::tokenizer::{Span, Tokenized};

/// Render spans to text, padding every CJK character with spaces
///
/// Each protected word must be restored exactly once; anything else means
/// the span list and the token table disagree.
pub fn render(tokenized: &Tokenized<'_>) -> Result<String> {
    let table = &tokenized.table;
    let mut restored = vec![false; table.len()];
    let mut out = String::new();

    for span in &tokenized.spans {
        match *span {
            Span::Protected(id) => {
                let word = table.get(id).ok_or_else(|| {
                    SpacingError::consistency(format!(
                        "protected token {} not found ({} recorded)",
                        id.0,
                        table.len()
                    ))
                })?;
                if std::mem::replace(&mut restored[id.0], true) {
                    return Err(SpacingError::consistency(format!(
                        "protected token {} restored twice",
                        id.0
                    )));
                }
                out.push_str(word);
            }
            Span::Cjk(ch) => {
                out.push(' ');
                out.push(ch);
                out.push(' ');
            }
            Span::Other(text) => out.push_str(text),
        }
    }

    if let Some(missing) = restored.iter().position(|done| !done) {
        return Err(SpacingError::consistency(format!(
            "protected token {missing} was never restored"
        )));
    }

    Ok(out)
}

/// Collapse whitespace runs, drop spaces before tight punctuation, trim
pub fn cleanup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space && !is_tight_punctuation(ch) {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    out
}
