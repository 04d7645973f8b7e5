//! Lookahead-slot cursor shared by the buffering tokenizers.
//!
//! [`MatchCursor`] owns the fully materialized input and a compiled pattern,
//! and walks the non-overlapping matches left to right, one at a time, only
//! as far as needed to answer `has_next`. Each match goes through a refine
//! function that may narrow it (the sentence tokenizer trims whitespace) or
//! reject it, in which case the scan moves on to the next match.
//!
//! Empty matches are reported like any other; the scan then resumes one
//! character past them so that a pattern such as `x*` cannot stall.

use std::ops::Range;

use regex::Regex;
use tracing::debug;

use crate::analysis::token::Token;
use crate::error::{ItxError, Result};

/// Narrows a match to the token range, or rejects it with `None`.
pub type Refine = fn(&str, Range<usize>) -> Option<Range<usize>>;

/// Accept every match unchanged.
pub fn keep_match(_text: &str, range: Range<usize>) -> Option<Range<usize>> {
    Some(range)
}

/// Forward-only cursor over the matches of `regex` in `text`.
#[derive(Clone, Debug)]
pub struct MatchCursor {
    text: String,
    regex: Regex,
    refine: Refine,
    /// Byte position where the next search starts. May reach `text.len() + 1`
    /// after an empty match at the very end.
    cursor: usize,
    next: Option<Token>,
    exhausted: bool,
    produced: usize,
}

impl MatchCursor {
    /// Create a cursor that yields every match unchanged.
    pub fn new(text: String, regex: Regex) -> Self {
        Self::with_refine(text, regex, keep_match)
    }

    /// Create a cursor that passes every match through `refine`.
    pub fn with_refine(text: String, regex: Regex, refine: Refine) -> Self {
        MatchCursor {
            text,
            regex,
            refine,
            cursor: 0,
            next: None,
            exhausted: false,
            produced: 0,
        }
    }

    /// The buffered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The pattern being matched.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether another accepted match exists, filling the lookahead slot.
    pub fn has_next(&mut self) -> bool {
        self.fill();
        self.next.is_some()
    }

    /// Consume the token held in the lookahead slot.
    pub fn next_token(&mut self) -> Result<Token> {
        let token = self.next.take().ok_or(ItxError::NoTokenAvailable)?;
        self.produced += 1;
        Ok(token)
    }

    /// Number of tokens consumed so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    fn fill(&mut self) {
        if self.next.is_some() || self.exhausted {
            return;
        }

        while self.cursor <= self.text.len() {
            let Some(found) = self.regex.find_at(&self.text, self.cursor) else {
                break;
            };
            let range = found.range();
            self.cursor = if range.is_empty() {
                self.step_past(range.end)
            } else {
                range.end
            };

            if let Some(range) = (self.refine)(&self.text, range) {
                self.next = Some(Token::with_offsets(
                    &self.text[range.clone()],
                    self.produced,
                    range.start,
                    range.end,
                ));
                return;
            }
        }

        self.exhausted = true;
        debug!(
            pattern = self.regex.as_str(),
            tokens = self.produced,
            "match cursor exhausted"
        );
    }

    /// The position one character after `at`, or past the end of the text.
    fn step_past(&self, at: usize) -> usize {
        match self.text[at..].chars().next() {
            Some(c) => at + c.len_utf8(),
            None => self.text.len() + 1,
        }
    }
}
