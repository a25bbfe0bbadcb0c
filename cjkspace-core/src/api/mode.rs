//! Spacing mode selection

use std::fmt;
use std::str::FromStr;

use crate::error::SpacingError;

/// Which spacing transform to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpacingMode {
    /// One-pass character scan, optionally keeping newlines
    Simple,
    /// Protect-space-restore with whitespace cleanup
    #[default]
    Enhanced,
}

impl SpacingMode {
    /// All modes, in display order
    pub const ALL: [SpacingMode; 2] = [SpacingMode::Simple, SpacingMode::Enhanced];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            SpacingMode::Simple => "simple",
            SpacingMode::Enhanced => "enhanced",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            SpacingMode::Simple => "character scan, spaces after CJK characters, can keep newlines",
            SpacingMode::Enhanced => "keeps Latin words whole, pads CJK, collapses whitespace",
        }
    }
}

impl fmt::Display for SpacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpacingMode {
    type Err = SpacingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "v2" => Ok(SpacingMode::Simple),
            "enhanced" | "v4" => Ok(SpacingMode::Enhanced),
            other => Err(SpacingError::Configuration(format!(
                "unknown spacing mode '{other}'"
            ))),
        }
    }
}
