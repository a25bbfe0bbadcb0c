//! Character classification for CJK spacing
//!
//! CJK membership is decided by a fixed table of inclusive code-point
//! ranges. The table order is significant only for readability; lookups
//! scan it linearly.

/// Inclusive code-point ranges treated as CJK
pub const CJK_RANGES: &[(char, char)] = &[
    ('\u{2E80}', '\u{2E99}'), // CJK Radicals Supplement
    ('\u{2E9B}', '\u{2EF3}'), // CJK Radicals Supplement
    ('\u{2F00}', '\u{2FD5}'), // Kangxi Radicals
    ('\u{3000}', '\u{303F}'), // CJK Symbols and Punctuation
    ('\u{4E00}', '\u{9FFF}'), // CJK Unified Ideographs
    ('\u{3400}', '\u{4DBF}'), // CJK Unified Ideographs Extension A
    ('\u{F900}', '\u{FAFF}'), // CJK Compatibility Ideographs
    ('\u{FE30}', '\u{FE4F}'), // CJK Compatibility Forms
];

/// Characters that may join two letter runs inside a protected word
pub const PROTECTED_JOINERS: &[char] = &['\'', '\u{2018}', '\u{2019}', '\u{02BC}', '-'];

/// Punctuation that never takes a space in front of it after cleanup
pub const TIGHT_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '%', ':', ';', '\u{2019}', '\u{2018}', '\u{201C}', '\u{201D}',
];

/// Classification of a single code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// Member of the CJK range table
    Cjk,
    /// ASCII Latin letter, the building block of protected words
    LatinLetter,
    /// Whitespace, including newlines
    Whitespace,
    /// Punctuation, digits and everything else
    Other,
}

impl CharacterClass {
    /// Check if this class is CJK
    pub fn is_cjk(self) -> bool {
        matches!(self, CharacterClass::Cjk)
    }
}

/// Check if a character falls in the CJK range table
#[inline]
pub fn is_cjk(ch: char) -> bool {
    CJK_RANGES
        .iter()
        .any(|&(start, end)| start <= ch && ch <= end)
}

/// Classify a character
///
/// The CJK table wins over whitespace, so U+3000 IDEOGRAPHIC SPACE is
/// classified as [`CharacterClass::Cjk`].
pub fn classify(ch: char) -> CharacterClass {
    if is_cjk(ch) {
        CharacterClass::Cjk
    } else if ch.is_whitespace() {
        CharacterClass::Whitespace
    } else if ch.is_ascii_alphabetic() {
        CharacterClass::LatinLetter
    } else {
        CharacterClass::Other
    }
}

/// Check if a character may join letters inside a protected word
#[inline]
pub fn is_protected_joiner(ch: char) -> bool {
    PROTECTED_JOINERS.contains(&ch)
}

/// Check if a preceding space must be removed before this character
#[inline]
pub fn is_tight_punctuation(ch: char) -> bool {
    TIGHT_PUNCTUATION.contains(&ch)
}

/// Count CJK code points in a string
pub fn count_cjk(text: &str) -> usize {
    text.chars().filter(|&ch| is_cjk(ch)).count()
}
