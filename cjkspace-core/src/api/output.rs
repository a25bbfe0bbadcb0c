//! Output types for the spacer facade

use crate::api::SpacingMode;

/// Spaced text together with processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The transformed text
    pub text: String,
    /// Information about the run
    pub metadata: Metadata,
}

/// Information about one transform call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Mode that produced the text
    pub mode: SpacingMode,
    /// Code points in the input
    pub input_chars: usize,
    /// Code points in the output
    pub output_chars: usize,
    /// CJK code points in the input
    pub cjk_chars: usize,
    /// Protected Latin words (enhanced mode only)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub protected_tokens: Option<usize>,
    /// Wall-clock processing time
    pub processing_time_ms: u64,
}

impl Output {
    /// Code points added by spacing (negative when whitespace was collapsed)
    pub fn char_delta(&self) -> isize {
        self.metadata.output_chars as isize - self.metadata.input_chars as isize
    }
}
