//! Tokenizer implementations over a [`TextSource`].
//!
//! Every tokenizer is a forward-only cursor that answers [`Tokenizer::has_next`]
//! from at most one token of lookahead and hands that token out through
//! [`Tokenizer::next_token`]. Once `has_next` reports `false` it keeps doing so.
//! Calling `next_token` without a successful `has_next` first, or after
//! exhaustion, fails with
//! [`ItxError::NoTokenAvailable`](crate::error::ItxError::NoTokenAvailable).
//!
//! # Available Tokenizers
//!
//! - [`character::CharacterTokenizer`] - One token per character (streaming)
//! - [`word::WordTokenizer`] - Whitespace-delimited words (streaming)
//! - [`sentence::SentenceTokenizer`] - Text ending in `.`, `!` or `?` (buffering)
//! - [`number::NumberTokenizer`] - Signed integer and decimal literals (buffering)
//! - [`RegexTokenizer`](self::regex::RegexTokenizer) - Matches of a given pattern (buffering)
//!
//! [`TextTokenizer`] selects one of them by [`TokenizeMode`].
//!
//! # Examples
//!
//! ```
//! use itx::analysis::tokenizer::{TextTokenizer, TokenizeMode, Tokenizer};
//! use itx::source::TextSource;
//!
//! let mut source = TextSource::from_text("Hello world. How are you? Fine!");
//! let mut tokenizer = TextTokenizer::new(TokenizeMode::Sentences, &mut source, None).unwrap();
//!
//! assert!(tokenizer.has_next());
//! assert_eq!(tokenizer.next_token().unwrap().text, "Hello world.");
//! let rest: Vec<String> = tokenizer.map(String::from).collect();
//! assert_eq!(rest, vec!["How are you?", "Fine!"]);
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::Result;
use crate::source::TextSource;

/// Pull-based lazy sequence of tokens.
pub trait Tokenizer {
    /// Whether another token is available, reading ahead if necessary.
    fn has_next(&mut self) -> bool;

    /// Take the token found by the last successful [`has_next`](Tokenizer::has_next).
    fn next_token(&mut self) -> Result<Token>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Number of tokens handed out so far.
    fn tokens_produced(&self) -> usize;

    /// Borrow this tokenizer as an [`Iterator`] that drives the pull protocol.
    fn by_tokens(&mut self) -> Tokens<'_, Self>
    where
        Self: Sized,
    {
        Tokens { tokenizer: self }
    }
}

/// Iterator adapter returned by [`Tokenizer::by_tokens`].
#[derive(Debug)]
pub struct Tokens<'t, T> {
    tokenizer: &'t mut T,
}

impl<T: Tokenizer> Iterator for Tokens<'_, T> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.tokenizer.has_next() {
            self.tokenizer.next_token().ok()
        } else {
            None
        }
    }
}

/// The tokenization modes understood by [`TextTokenizer`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizeMode {
    /// One token per character
    #[value(name = "c", alias = "chars")]
    Chars,
    /// Whitespace-delimited words
    #[value(name = "w", alias = "words")]
    Words,
    /// Sentences ending in `.`, `!` or `?`
    #[value(name = "s", alias = "sentences")]
    Sentences,
    /// Numeric literals
    #[value(name = "n", alias = "numbers")]
    Numbers,
    /// Matches of a regular expression
    #[value(name = "r", alias = "regex")]
    Regex,
}

impl TokenizeMode {
    /// Whether this mode needs a pattern argument on the command line.
    pub fn requires_pattern(self) -> bool {
        matches!(self, TokenizeMode::Regex)
    }

    /// Whether this mode reads the whole input before producing a token.
    pub fn is_buffering(self) -> bool {
        matches!(
            self,
            TokenizeMode::Sentences | TokenizeMode::Numbers | TokenizeMode::Regex
        )
    }
}

/// One of the five tokenizers, selected by mode.
#[derive(Debug)]
pub enum TextTokenizer<'a> {
    Character(CharacterTokenizer<'a>),
    Word(WordTokenizer<'a>),
    Sentence(SentenceTokenizer),
    Number(NumberTokenizer),
    Regex(RegexTokenizer),
}

impl<'a> TextTokenizer<'a> {
    /// Build the tokenizer for `mode` around `source`.
    ///
    /// `pattern` is only consulted in [`TokenizeMode::Regex`]; `None` selects
    /// [`DEFAULT_PATTERN`](self::regex::DEFAULT_PATTERN). Buffering modes read
    /// the whole source here, so read failures and invalid patterns are
    /// reported before any token is requested.
    pub fn new(
        mode: TokenizeMode,
        source: &'a mut TextSource,
        pattern: Option<&str>,
    ) -> Result<Self> {
        Ok(match mode {
            TokenizeMode::Chars => TextTokenizer::Character(CharacterTokenizer::new(source)),
            TokenizeMode::Words => TextTokenizer::Word(WordTokenizer::new(source)),
            TokenizeMode::Sentences => TextTokenizer::Sentence(SentenceTokenizer::new(source)?),
            TokenizeMode::Numbers => TextTokenizer::Number(NumberTokenizer::new(source)?),
            TokenizeMode::Regex => TextTokenizer::Regex(match pattern {
                Some(pattern) => RegexTokenizer::with_pattern(source, pattern)?,
                None => RegexTokenizer::new(source)?,
            }),
        })
    }

    fn inner(&self) -> &dyn Tokenizer {
        match self {
            TextTokenizer::Character(t) => t,
            TextTokenizer::Word(t) => t,
            TextTokenizer::Sentence(t) => t,
            TextTokenizer::Number(t) => t,
            TextTokenizer::Regex(t) => t,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Tokenizer {
        match self {
            TextTokenizer::Character(t) => t,
            TextTokenizer::Word(t) => t,
            TextTokenizer::Sentence(t) => t,
            TextTokenizer::Number(t) => t,
            TextTokenizer::Regex(t) => t,
        }
    }
}

impl Tokenizer for TextTokenizer<'_> {
    fn has_next(&mut self) -> bool {
        self.inner_mut().has_next()
    }

    fn next_token(&mut self) -> Result<Token> {
        self.inner_mut().next_token()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn tokens_produced(&self) -> usize {
        self.inner().tokens_produced()
    }
}

impl Iterator for TextTokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.by_tokens().next()
    }
}

// Individual tokenizer modules
pub mod buffered;
pub mod character;
pub mod number;
pub mod regex;
pub mod sentence;
pub mod word;

// Re-export all tokenizers for convenient access
pub use buffered::MatchCursor;
pub use character::CharacterTokenizer;
pub use number::NumberTokenizer;
pub use self::regex::RegexTokenizer;
pub use sentence::SentenceTokenizer;
pub use word::WordTokenizer;
