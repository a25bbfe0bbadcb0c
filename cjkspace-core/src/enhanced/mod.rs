//! Protect-space-restore spacer
//!
//! Latin words (including contractions and hyphenated compounds) are
//! lifted out as protected tokens, every CJK character is padded with
//! spaces, the words are put back, and the result is normalized:
//!
//! 1. tokenize into [`Span`]s, recording protected words in a [`TokenTable`]
//! 2. render CJK spans as `" ch "`
//! 3. restore each protected word exactly once
//! 4. collapse whitespace, drop spaces before tight punctuation, trim

pub mod render;
pub mod tokenizer;

pub use tokenizer::{tokenize, Span, TokenId, TokenTable, Tokenized};

use crate::error::{ensure_not_blank, Result};

/// Enhanced spacing result with the number of protected words
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnhancedOutput {
    pub text: String,
    pub protected_tokens: usize,
}

/// Space CJK text, keeping Latin words intact
///
/// # Errors
///
/// Returns [`SpacingError::EmptyInput`](crate::SpacingError::EmptyInput)
/// for blank input and
/// [`SpacingError::InternalConsistency`](crate::SpacingError::InternalConsistency)
/// if a protected word cannot be restored.
///
/// # Example
///
/// ```rust
/// use cjkspace_core::enhanced_space;
///
/// assert_eq!(enhanced_space("I like中国").unwrap(), "I like 中 国");
/// ```
pub fn enhanced_space(text: &str) -> Result<String> {
    enhanced_space_detailed(text).map(|out| out.text)
}

pub(crate) fn enhanced_space_detailed(text: &str) -> Result<EnhancedOutput> {
    let text = ensure_not_blank(text)?;
    let tokenized = tokenize(text);
    let rendered = render::render(&tokenized)?;

    Ok(EnhancedOutput {
        text: render::cleanup(&rendered),
        protected_tokens: tokenized.table.len(),
    })
}
