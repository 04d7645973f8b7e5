//! Number tokenizer implementation.

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use super::buffered::MatchCursor;
use crate::analysis::token::Token;
use crate::error::Result;
use crate::source::TextSource;

lazy_static! {
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"[+-]?[0-9]+(?:\.[0-9]+)?").expect("number pattern should be valid");
}

/// A buffering tokenizer that yields signed integer and decimal literals.
///
/// Literals are returned exactly as written: `-007` stays `-007`, and a
/// trailing `.` without digits is not part of the number.
#[derive(Clone, Debug)]
pub struct NumberTokenizer {
    matches: MatchCursor,
}

impl NumberTokenizer {
    /// Read all of `source` and prepare to scan it for numbers.
    pub fn new(source: &mut TextSource) -> Result<Self> {
        Ok(Self::from_text(source.read_all()?))
    }

    /// Scan an already materialized text.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        NumberTokenizer {
            matches: MatchCursor::new(text.into(), NUMBER_PATTERN.clone()),
        }
    }
}

impl Tokenizer for NumberTokenizer {
    fn has_next(&mut self) -> bool {
        self.matches.has_next()
    }

    fn next_token(&mut self) -> Result<Token> {
        self.matches.next_token()
    }

    fn name(&self) -> &'static str {
        "number"
    }

    fn tokens_produced(&self) -> usize {
        self.matches.produced()
    }
}

impl Iterator for NumberTokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.by_tokens().next()
    }
}
