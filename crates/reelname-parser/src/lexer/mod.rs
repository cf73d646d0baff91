//! Logos-based lexer for release-metadata markers.
//!
//! The season/episode and year heuristics work on the raw string with
//! regular expressions; this lexer only answers "where do the release tags
//! start?" for resolution and episode-title extraction.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `pos` falls inside the span.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Characters that separate words in release names.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '_' | '-' | '(' | ')' | '[' | ']' | '{' | '}')
}

/// A tokenized release name.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Span)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Tokenize the entire input immediately. Characters no rule accepts
    /// are dropped.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, Span::from(span))))
            .collect();
        Self { tokens, input }
    }

    /// Get the original input string.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Whether the span has a separator (or the string edge) on both sides.
    pub fn is_bounded(&self, span: Span) -> bool {
        let before = self.input[..span.start]
            .chars()
            .next_back()
            .map_or(true, is_separator);
        let after = self.input[span.end..]
            .chars()
            .next()
            .map_or(true, is_separator);
        before && after
    }

    /// Release-metadata markers that stand alone between separators.
    pub fn markers(&self) -> impl Iterator<Item = &(Token<'src>, Span)> + '_ {
        self.tokens
            .iter()
            .filter(move |(t, span)| t.is_release_marker() && self.is_bounded(*span))
    }
}
