//! Spacing between CJK characters and adjacent Latin text or punctuation
//!
//! Two transforms are provided, both pure functions of their input:
//!
//! - [`simple_space`]: a one-pass character scan that inserts a space after
//!   every CJK character unless a space already follows, optionally keeping
//!   newlines.
//! - [`enhanced_space`]: tokenizes Latin words (`don't`, `passer-by`) into
//!   protected spans, pads every CJK character with spaces, restores the
//!   words, then collapses whitespace and removes spaces before closing
//!   punctuation such as `.` `,` `%`.
//!
//! [`Spacer`] wraps both behind a [`Config`] and reports metadata and
//! progress.
//!
//! # Example
//!
//! ```rust
//! use cjkspace_core::{Config, SpacingMode, Spacer};
//!
//! let spacer = Spacer::new();
//! assert_eq!(spacer.space("这是don't应该").unwrap(), "这 是 don't 应 该");
//!
//! let config = Config::builder()
//!     .mode(SpacingMode::Simple)
//!     .keep_newlines(true)
//!     .build()
//!     .unwrap();
//! let spacer = Spacer::with_config(config).unwrap();
//! assert_eq!(spacer.space("你好\nworld").unwrap(), "你 好\nworld");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod classify;
pub mod enhanced;
pub mod error;
pub mod progress;
pub mod simple;

pub use api::{Config, ConfigBuilder, Metadata, Output, Spacer, SpacingMode};
pub use classify::{classify, is_cjk, CharacterClass, CJK_RANGES};
pub use enhanced::enhanced_space;
pub use error::{Result, SpacingError};
pub use progress::{NoProgress, Progress, ProgressSink, DEFAULT_PROGRESS_INTERVAL};
pub use simple::{simple_space, simple_space_with_progress};
