//! Progress reporting module

use cjkspace_core::{Progress, ProgressSink};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for document processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for file processing
    ///
    /// A single document gets no file bar; its character progress is shown
    /// through [`ProgressReporter::text_progress`] instead.
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed document
    pub fn file_completed(&self, source: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {}", source));
            pb.inc(1);
        }
    }

    /// Character-level progress sink for one document
    pub fn text_progress(&self) -> TextProgress {
        if self.quiet || self.progress_bar.is_some() {
            return TextProgress { bar: None };
        }

        let pb = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{bar:40.green/white} {percent:>3}% {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        TextProgress { bar: Some(pb) }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

/// Progress sink that drives a character-level progress bar
pub struct TextProgress {
    bar: Option<ProgressBar>,
}

impl TextProgress {
    /// Whether a bar is being drawn
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clear the bar once the document is done
    pub fn finish(&self) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
        }
    }
}

impl ProgressSink for TextProgress {
    fn report(&mut self, progress: Progress) {
        if let Some(pb) = &self.bar {
            pb.set_length(progress.total as u64);
            pb.set_position(progress.processed as u64);
            pb.set_message(format!("Processing: {:.0}%", progress.fraction() * 100.0));
        }
    }
}
