//! Spacer facade

use std::time::Instant;

use crate::api::{Config, Metadata, Output, SpacingMode};
use crate::classify::count_cjk;
use crate::enhanced::enhanced_space_detailed;
use crate::error::Result;
use crate::progress::{NoProgress, Progress, ProgressSink};
use crate::simple::simple_space_with_progress;

/// Main entry point for CJK spacing
///
/// Holds an immutable [`Config`]; one instance can be shared freely and
/// reused for any number of texts.
#[derive(Debug, Clone, Default)]
pub struct Spacer {
    config: Config,
}

impl Spacer {
    /// Create a spacer with the default configuration (enhanced mode)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spacer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a spacer for a specific mode with otherwise default settings
    pub fn with_mode(mode: SpacingMode) -> Self {
        Self {
            config: Config {
                mode,
                ..Config::default()
            },
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Space a text and return only the result
    pub fn space(&self, text: &str) -> Result<String> {
        self.space_with_progress(text, &mut NoProgress)
    }

    /// Space a text, reporting progress to `sink`
    pub fn space_with_progress(&self, text: &str, sink: &mut dyn ProgressSink) -> Result<String> {
        self.run(text, sink).map(|(text, _)| text)
    }

    /// Space a text and collect metadata about the run
    pub fn process(&self, text: &str) -> Result<Output> {
        self.process_with_progress(text, &mut NoProgress)
    }

    /// Space a text with progress reporting and collect metadata
    pub fn process_with_progress(
        &self,
        text: &str,
        sink: &mut dyn ProgressSink,
    ) -> Result<Output> {
        let start = Instant::now();
        let (spaced, protected_tokens) = self.run(text, sink)?;
        let elapsed = start.elapsed();

        let metadata = Metadata {
            mode: self.config.mode,
            input_chars: text.chars().count(),
            output_chars: spaced.chars().count(),
            cjk_chars: count_cjk(text),
            protected_tokens,
            processing_time_ms: elapsed.as_millis() as u64,
        };

        log::debug!(
            "spaced {} chars ({} CJK) in {:?} mode, {} ms",
            metadata.input_chars,
            metadata.cjk_chars,
            metadata.mode,
            metadata.processing_time_ms
        );

        Ok(Output {
            text: spaced,
            metadata,
        })
    }

    fn run(&self, text: &str, sink: &mut dyn ProgressSink) -> Result<(String, Option<usize>)> {
        log::trace!("running {} spacer on {} bytes", self.config.mode, text.len());

        match self.config.mode {
            SpacingMode::Simple => simple_space_with_progress(
                text,
                self.config.keep_newlines,
                self.config.progress_interval,
                sink,
            )
            .map(|spaced| (spaced, None)),
            SpacingMode::Enhanced => {
                let out = enhanced_space_detailed(text)?;
                let total = text.trim().chars().count();
                sink.report(Progress {
                    processed: total,
                    total,
                });
                Ok((out.text, Some(out.protected_tokens)))
            }
        }
    }
}
