//! Word tokenizer implementation.

use tracing::{debug, warn};

use super::Tokenizer;
use crate::analysis::token::Token;
use crate::error::{ItxError, Result};
use crate::source::TextSource;

/// Word delimiters: space, tab, newline, carriage return and form feed.
///
/// Other Unicode spaces such as U+00A0 stay inside words.
pub fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// A streaming tokenizer that splits on runs of [`is_delimiter`] characters.
///
/// Words are produced as soon as their terminating delimiter (or the end of
/// the stream) has been read.
#[derive(Debug)]
pub struct WordTokenizer<'a> {
    source: &'a mut TextSource,
    next: Option<Token>,
    exhausted: bool,
    offset: usize,
    produced: usize,
}

impl<'a> WordTokenizer<'a> {
    /// Create a new word tokenizer reading from `source`.
    pub fn new(source: &'a mut TextSource) -> Self {
        WordTokenizer {
            source,
            next: None,
            exhausted: false,
            offset: 0,
            produced: 0,
        }
    }

    /// Pull one character, folding read errors into end of stream.
    fn pull(&mut self) -> Option<char> {
        match self.source.read_char() {
            Ok(Some(c)) => {
                self.offset += c.len_utf8();
                Some(c)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "read failed, treating as end of stream");
                None
            }
        }
    }

    fn scan_word(&mut self) -> Option<Token> {
        let mut word = String::new();
        let mut start = self.offset;

        loop {
            match self.pull() {
                Some(c) if is_delimiter(c) => {
                    if !word.is_empty() {
                        // The delimiter is consumed but not part of the word.
                        let end = self.offset - c.len_utf8();
                        return Some(Token::with_offsets(word, self.produced, start, end));
                    }
                    start = self.offset;
                }
                Some(c) => word.push(c),
                None => {
                    self.exhausted = true;
                    if word.is_empty() {
                        return None;
                    }
                    return Some(Token::with_offsets(word, self.produced, start, self.offset));
                }
            }
        }
    }
}

impl Tokenizer for WordTokenizer<'_> {
    fn has_next(&mut self) -> bool {
        if self.next.is_none() && !self.exhausted {
            self.next = self.scan_word();
            if self.next.is_none() {
                debug!(tokens = self.produced, "word tokenizer exhausted");
            }
        }
        self.next.is_some()
    }

    fn next_token(&mut self) -> Result<Token> {
        let token = self.next.take().ok_or(ItxError::NoTokenAvailable)?;
        self.produced += 1;
        Ok(token)
    }

    fn name(&self) -> &'static str {
        "word"
    }

    fn tokens_produced(&self) -> usize {
        self.produced
    }
}

impl Iterator for WordTokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.by_tokens().next()
    }
}
