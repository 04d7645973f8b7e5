//! Sentence tokenizer implementation.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use super::buffered::MatchCursor;
use crate::analysis::token::Token;
use crate::error::Result;
use crate::source::TextSource;

lazy_static! {
    /// A run without terminators followed by exactly one terminator.
    static ref SENTENCE_PATTERN: Regex =
        Regex::new(r"[^.!?]*[.!?]").expect("sentence pattern should be valid");
}

/// Characters stripped around a sentence: ASCII controls and space.
fn is_trimmed(c: char) -> bool {
    c <= ' '
}

/// Trim a sentence match and drop it if nothing is left.
///
/// Non-ASCII spaces such as U+00A0 are kept.
fn trim_sentence(text: &str, range: Range<usize>) -> Option<Range<usize>> {
    let raw = &text[range.clone()];
    let trimmed = raw.trim_matches(is_trimmed);
    if trimmed.is_empty() {
        return None;
    }
    let start = range.start + (raw.len() - raw.trim_start_matches(is_trimmed).len());
    Some(start..start + trimmed.len())
}

/// A buffering tokenizer that yields sentences terminated by `.`, `!` or `?`.
///
/// The whole source is read on construction. Every terminator closes a
/// sentence, so `"Wait... what?"` yields `"Wait."`, `"."`, `"."` and
/// `"what?"`. Text after the last terminator is dropped.
#[derive(Clone, Debug)]
pub struct SentenceTokenizer {
    matches: MatchCursor,
}

impl SentenceTokenizer {
    /// Read all of `source` and prepare to scan it for sentences.
    pub fn new(source: &mut TextSource) -> Result<Self> {
        Ok(Self::from_text(source.read_all()?))
    }

    /// Scan an already materialized text.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        SentenceTokenizer {
            matches: MatchCursor::with_refine(
                text.into(),
                SENTENCE_PATTERN.clone(),
                trim_sentence,
            ),
        }
    }
}

impl Tokenizer for SentenceTokenizer {
    fn has_next(&mut self) -> bool {
        self.matches.has_next()
    }

    fn next_token(&mut self) -> Result<Token> {
        self.matches.next_token()
    }

    fn name(&self) -> &'static str {
        "sentence"
    }

    fn tokens_produced(&self) -> usize {
        self.matches.produced()
    }
}

impl Iterator for SentenceTokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.by_tokens().next()
    }
}
