//! Token type produced by the tokenizers.
//!
//! A [`Token`] is an immutable piece of text plus where it came from: its
//! 0-based position in the produced sequence and its byte offsets in the text
//! consumed from the source. What the text means depends on the tokenizer
//! that produced it (a character, a word, a sentence, a number or a pattern
//! match).
//!
//! # Examples
//!
//! ```
//! use itx::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.to_string(), "world");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of output text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the produced sequence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the consumed text
    pub start_offset: usize,

    /// The byte offset where this token ends in the consumed text
    pub end_offset: usize,
}

impl Token {
    /// Create a token whose offsets cover exactly its own text.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty. Only pattern tokens can be.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.text
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 3);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_compares_with_str() {
        let token = Token::with_offsets("-2.5", 1, 3, 7);
        assert_eq!(token, "-2.5");
        assert_eq!(String::from(token), "-2.5");
    }

    #[test]
    fn test_token_json_shape() {
        let token = Token::with_offsets("Fine!", 2, 26, 31);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Fine!","position":2,"start_offset":26,"end_offset":31}"#
        );
    }
}
