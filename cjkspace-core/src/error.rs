//! Core error types (deterministic only)

use thiserror::Error;

/// Errors raised by the spacing transforms
///
/// Every variant is deterministic: retrying the same call with the same
/// input reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpacingError {
    /// Input was empty or contained only whitespace
    #[error("input text is empty")]
    EmptyInput,

    /// Protected token restoration could not be completed
    #[error("internal consistency error: {detail}")]
    InternalConsistency {
        /// What went wrong while restoring protected tokens
        detail: String,
    },

    /// Invalid processor configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SpacingError {
    pub(crate) fn consistency(detail: impl Into<String>) -> Self {
        SpacingError::InternalConsistency {
            detail: detail.into(),
        }
    }
}

/// Result type for spacing operations
pub type Result<T> = std::result::Result<T, SpacingError>;

/// Reject input that is empty once surrounding whitespace is removed
pub(crate) fn ensure_not_blank(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SpacingError::EmptyInput);
    }
    Ok(trimmed)
}
