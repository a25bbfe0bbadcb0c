//! Character-scan spacer
//!
//! A single left-to-right pass that only ever looks one character back.
//! A separator space is inserted after a CJK character whenever the next
//! character is not already a space; explicit spaces are never doubled.

use crate::classify::is_cjk;
use crate::error::{ensure_not_blank, Result};
use crate::progress::{NoProgress, Progress, ProgressSink, DEFAULT_PROGRESS_INTERVAL};

/// Space CJK text with a one-pass character scan
///
/// With `keep_newlines` set, newlines are emitted unchanged and reset the
/// scan state; otherwise each newline is treated as a plain space.
///
/// # Errors
///
/// Returns [`SpacingError::EmptyInput`](crate::SpacingError::EmptyInput)
/// when `text` is empty or whitespace-only.
pub fn simple_space(text: &str, keep_newlines: bool) -> Result<String> {
    simple_space_with_progress(text, keep_newlines, DEFAULT_PROGRESS_INTERVAL, &mut NoProgress)
}

/// Same as [`simple_space`], reporting progress every `interval` code points
///
/// The sink is notified at the first code point, at every multiple of
/// `interval`, and at the last code point. An `interval` of zero only
/// reports the first and last code points.
pub fn simple_space_with_progress(
    text: &str,
    keep_newlines: bool,
    interval: usize,
    sink: &mut dyn ProgressSink,
) -> Result<String> {
    let text = ensure_not_blank(text)?;
    let total = text.chars().count();

    let mut result = String::with_capacity(text.len() + text.len() / 2);
    let mut prev_is_cjk = false;
    let mut prev_char: Option<char> = None;

    for (i, original) in text.chars().enumerate() {
        let ch = if original == '\n' {
            if keep_newlines {
                result.push('\n');
                prev_is_cjk = false;
                prev_char = None;
                report(sink, i, total, interval);
                continue;
            }
            ' '
        } else {
            original
        };

        if is_cjk(ch) {
            if prev_is_cjk && !matches!(prev_char, Some(' ') | Some('\n')) {
                result.push(' ');
            }
            result.push(ch);
            prev_is_cjk = true;
        } else {
            if prev_is_cjk && ch != ' ' {
                result.push(' ');
            }
            result.push(ch);
            prev_is_cjk = false;
        }

        prev_char = Some(ch);
        report(sink, i, total, interval);
    }

    Ok(result.trim().to_string())
}

fn report(sink: &mut dyn ProgressSink, index: usize, total: usize, interval: usize) {
    let on_interval = if interval == 0 {
        index == 0
    } else {
        index % interval == 0
    };
    if on_interval || index + 1 == total {
        sink.report(Progress {
            processed: index + 1,
            total,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpacingError;

    #[test]
    fn test_adjacent_cjk_spaced() {
        assert_eq!(simple_space("你好世界", false).unwrap(), "你 好 世 界");
    }

    #[test]
    fn test_cjk_then_latin() {
        assert_eq!(simple_space("中文abc", false).unwrap(), "中 文 abc");
    }

    #[test]
    fn test_latin_then_cjk_untouched() {
        // Only the character after a CJK character gets a separator
        assert_eq!(simple_space("abc中文", false).unwrap(), "abc中 文");
    }

    #[test]
    fn test_existing_space_not_doubled() {
        assert_eq!(simple_space("你 好", false).unwrap(), "你 好");
        assert_eq!(simple_space("中 abc", false).unwrap(), "中 abc");
    }

    #[test]
    fn test_newline_kept() {
        assert_eq!(simple_space("你好\nworld", true).unwrap(), "你 好\nworld");
        assert_eq!(simple_space("中\n文", true).unwrap(), "中\n文");
    }

    #[test]
    fn test_newline_replaced() {
        assert_eq!(simple_space("你好\nworld", false).unwrap(), "你 好 world");
        assert_eq!(simple_space("中\n文", false).unwrap(), "中 文");
    }

    #[test]
    fn test_punctuation_after_cjk() {
        assert_eq!(simple_space("好!", false).unwrap(), "好 !");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(simple_space("  \n中文\n  ", true).unwrap(), "中 文");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(simple_space("", false), Err(SpacingError::EmptyInput));
        assert_eq!(simple_space(" \n\t ", true), Err(SpacingError::EmptyInput));
    }

    #[test]
    fn test_astral_characters_are_single_units() {
        assert_eq!(simple_space("中😀", false).unwrap(), "中 😀");
    }

    #[test]
    fn test_progress_reports() {
        let text = "字".repeat(1200);
        let mut reports = Vec::new();
        let mut sink = |p: Progress| reports.push(p.processed);
        simple_space_with_progress(&text, false, 500, &mut sink).unwrap();

        assert_eq!(reports, vec![1, 501, 1001, 1200]);
    }

    #[test]
    fn test_progress_zero_interval() {
        let mut reports = Vec::new();
        let mut sink = |p: Progress| reports.push(p);
        simple_space_with_progress("abc", false, 0, &mut sink).unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports[1].is_complete());
    }
}
