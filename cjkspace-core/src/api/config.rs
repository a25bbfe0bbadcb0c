//! Configuration API for the spacer

use crate::api::SpacingMode;
use crate::error::SpacingError;
use crate::progress::DEFAULT_PROGRESS_INTERVAL;

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) mode: SpacingMode,
    pub(crate) keep_newlines: bool,
    pub(crate) progress_interval: usize, // in code points
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: SpacingMode::default(),
            keep_newlines: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Selected spacing mode
    pub fn mode(&self) -> SpacingMode {
        self.mode
    }

    /// Whether newlines survive the simple spacer
    ///
    /// The enhanced spacer always folds newlines into single spaces.
    pub fn keep_newlines(&self) -> bool {
        self.keep_newlines
    }

    /// Code points between progress reports
    pub fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), SpacingError> {
        if self.progress_interval == 0 {
            return Err(SpacingError::Configuration(
                "progress_interval must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    mode: Option<SpacingMode>,
    keep_newlines: Option<bool>,
    progress_interval: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing mode
    pub fn mode(mut self, mode: SpacingMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the spacing mode by name
    pub fn mode_name(mut self, name: &str) -> Result<Self, SpacingError> {
        self.mode = Some(name.parse()?);
        Ok(self)
    }

    /// Keep newlines in simple mode
    pub fn keep_newlines(mut self, keep: bool) -> Self {
        self.keep_newlines = Some(keep);
        self
    }

    /// Set the progress interval in code points
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, SpacingError> {
        let mut config = Config::default();

        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        if let Some(keep) = self.keep_newlines {
            config.keep_newlines = keep;
        }

        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }

        config.validate()?;
        Ok(config)
    }
}
