//! Configuration module
//!
//! The optional TOML file supplies defaults; command-line flags override it.

use anyhow::{Context, Result};
use cjkspace_core::{SpacingMode, DEFAULT_PROGRESS_INTERVAL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Spacing configuration
    #[serde(default)]
    pub spacing: SpacingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Spacing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpacingConfig {
    /// Transform to run
    pub mode: SpacingMode,

    /// Keep newlines in simple mode
    pub keep_newlines: bool,

    /// Characters between progress updates
    pub progress_interval: usize,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            mode: SpacingMode::Enhanced,
            keep_newlines: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if config.spacing.progress_interval == 0 {
            return Err(CliError::ConfigError(
                "progress_interval must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Serialize configuration to TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
