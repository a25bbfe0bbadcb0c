//! Span tokenizer for the enhanced spacer
//!
//! Splits text into protected Latin words, single CJK characters and runs
//! of everything else. Protected words are stored once in a [`TokenTable`]
//! and referenced by id, so the renderer never has to search the text for
//! markers.

use std::sync::OnceLock;

use regex::Regex;

use crate::classify::is_cjk;

/// Latin word, optionally joined by apostrophes or hyphens
const PROTECTED_WORD_PATTERN: &str = "[A-Za-z]+(?:['\u{2018}\u{2019}\u{02BC}-][A-Za-z]+)*";

fn protected_word() -> &'static Regex {
    static PROTECTED_WORD: OnceLock<Regex> = OnceLock::new();
    PROTECTED_WORD.get_or_init(|| {
        Regex::new(PROTECTED_WORD_PATTERN).expect("protected word pattern is valid")
    })
}

/// Index of a protected word in its [`TokenTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub usize);

/// A tokenized piece of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Protected Latin word, restored verbatim
    Protected(TokenId),
    /// Single CJK character
    Cjk(char),
    /// Maximal run containing neither CJK characters nor protected words
    Other(&'a str),
}

/// Protected words in first-match-first-index order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenTable<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> TokenTable<'a> {
    fn push(&mut self, token: &'a str) -> TokenId {
        self.tokens.push(token);
        TokenId(self.tokens.len() - 1)
    }

    /// Look up a protected word
    pub fn get(&self, id: TokenId) -> Option<&'a str> {
        self.tokens.get(id.0).copied()
    }

    /// Number of protected words
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no word was protected
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the protected words in order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().copied()
    }
}

/// Result of the tokenizing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'a> {
    /// Spans in textual order
    pub spans: Vec<Span<'a>>,
    /// Protected words referenced by the spans
    pub table: TokenTable<'a>,
}

/// Tokenize text into spans
pub fn tokenize(text: &str) -> Tokenized<'_> {
    let mut spans = Vec::new();
    let mut table = TokenTable::default();
    let mut last = 0;

    for m in protected_word().find_iter(text) {
        split_unprotected(&text[last..m.start()], &mut spans);
        spans.push(Span::Protected(table.push(m.as_str())));
        last = m.end();
    }
    split_unprotected(&text[last..], &mut spans);

    Tokenized { spans, table }
}

/// Split a gap between protected words into CJK and other spans
fn split_unprotected<'a>(segment: &'a str, spans: &mut Vec<Span<'a>>) {
    let mut run_start: Option<usize> = None;

    for (idx, ch) in segment.char_indices() {
        if is_cjk(ch) {
            if let Some(start) = run_start.take() {
                spans.push(Span::Other(&segment[start..idx]));
            }
            spans.push(Span::Cjk(ch));
        } else if run_start.is_none() {
            run_start = Some(idx);
        }
    }

    if let Some(start) = run_start {
        spans.push(Span::Other(&segment[start..]));
    }
}
