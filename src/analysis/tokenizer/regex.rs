//! Regex-based tokenizer implementation.

use regex::{Regex, RegexBuilder};

use super::Tokenizer;
use super::buffered::MatchCursor;
use crate::analysis::token::Token;
use crate::error::{ItxError, Result};
use crate::source::TextSource;

/// Pattern used when the caller does not supply one.
///
/// `.` matches neither `\r` nor `\n`, so every non-empty line becomes one
/// token whether lines end in LF or CRLF.
pub const DEFAULT_PATTERN: &str = ".+";

/// A buffering tokenizer that yields every match of a regular expression.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    matches: MatchCursor,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new(source: &mut TextSource) -> Result<Self> {
        Self::with_pattern(source, DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    ///
    /// The pattern is compiled before the source is read, so an invalid
    /// pattern leaves the source untouched.
    pub fn with_pattern(source: &mut TextSource, pattern: &str) -> Result<Self> {
        let regex = compile(pattern)?;
        let text = source.read_all()?;
        Ok(RegexTokenizer {
            matches: MatchCursor::new(text, regex),
        })
    }

    /// Scan an already materialized text.
    pub fn from_text<S: Into<String>>(text: S, pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            matches: MatchCursor::new(text.into(), compile(pattern)?),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.matches.pattern()
    }
}

/// Compile `pattern` in CRLF mode: `.` excludes `\r`, and `^`/`$` in
/// multi-line mode treat `\r\n` as a line terminator.
fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .crlf(true)
        .build()
        .map_err(|e| ItxError::invalid_pattern(e.to_string()))
}

impl Tokenizer for RegexTokenizer {
    fn has_next(&mut self) -> bool {
        self.matches.has_next()
    }

    fn next_token(&mut self) -> Result<Token> {
        self.matches.next_token()
    }

    fn name(&self) -> &'static str {
        "regex"
    }

    fn tokens_produced(&self) -> usize {
        self.matches.produced()
    }
}

impl Iterator for RegexTokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.by_tokens().next()
    }
}
