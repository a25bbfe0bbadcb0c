//! Progress reporting hooks
//!
//! The transforms are synchronous and never yield, so progress is pushed to
//! a caller-supplied sink rather than polled.

/// Default number of code points between progress reports
pub const DEFAULT_PROGRESS_INTERVAL: usize = 500;

/// Snapshot of how far a transform has advanced, in code points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Code points consumed so far
    pub processed: usize,
    /// Total code points in the input
    pub total: usize,
}

impl Progress {
    /// Fraction of the input processed, in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.processed as f64 / self.total as f64
    }

    /// Whether the whole input has been processed
    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }
}

/// Receiver of progress notifications
pub trait ProgressSink {
    /// Called with the latest progress snapshot
    fn report(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressSink for F {
    fn report(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Sink that discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _progress: Progress) {}
}
