//! Character tokenizer implementation.

use tracing::{debug, warn};

use super::Tokenizer;
use crate::analysis::token::Token;
use crate::error::{ItxError, Result};
use crate::source::TextSource;

/// Lookahead state of a [`CharacterTokenizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lookahead {
    Need,
    Have(char),
    Exhausted,
}

/// A streaming tokenizer that yields every character, whitespace included,
/// as its own token.
#[derive(Debug)]
pub struct CharacterTokenizer<'a> {
    source: &'a mut TextSource,
    lookahead: Lookahead,
    offset: usize,
    produced: usize,
}

impl<'a> CharacterTokenizer<'a> {
    /// Create a new character tokenizer reading from `source`.
    pub fn new(source: &'a mut TextSource) -> Self {
        CharacterTokenizer {
            source,
            lookahead: Lookahead::Need,
            offset: 0,
            produced: 0,
        }
    }
}

impl Tokenizer for CharacterTokenizer<'_> {
    fn has_next(&mut self) -> bool {
        if self.lookahead == Lookahead::Need {
            self.lookahead = match self.source.read_char() {
                Ok(Some(c)) => Lookahead::Have(c),
                Ok(None) => {
                    debug!(tokens = self.produced, "character tokenizer exhausted");
                    Lookahead::Exhausted
                }
                Err(e) => {
                    warn!(error = %e, "read failed, treating as end of stream");
                    Lookahead::Exhausted
                }
            };
        }
        matches!(self.lookahead, Lookahead::Have(_))
    }

    fn next_token(&mut self) -> Result<Token> {
        let Lookahead::Have(c) = self.lookahead else {
            return Err(ItxError::NoTokenAvailable);
        };
        self.lookahead = Lookahead::Need;

        let start = self.offset;
        self.offset += c.len_utf8();
        let token = Token::with_offsets(c.to_string(), self.produced, start, self.offset);
        self.produced += 1;
        Ok(token)
    }

    fn name(&self) -> &'static str {
        "character"
    }

    fn tokens_produced(&self) -> usize {
        self.produced
    }
}

impl Iterator for CharacterTokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.by_tokens().next()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead, Read};

    use super::*;

    #[test]
    fn test_character_tokenizer() {
        let mut source = TextSource::from_text("a b\n");
        let tokens: Vec<Token> = CharacterTokenizer::new(&mut source).by_tokens().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].text, " ");
        assert_eq!(tokens[2].text, "b");
        assert_eq!(tokens[3].text, "\n");
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_concatenation_round_trips() {
        let text = "Grüße, 世界!\r\n\ttabs and  spaces ";
        let mut source = TextSource::from_text(text);
        let mut tokenizer = CharacterTokenizer::new(&mut source);
        let joined: String = tokenizer.by_tokens().map(|t| t.text).collect();

        assert_eq!(joined, text);
        assert_eq!(tokenizer.tokens_produced(), text.chars().count());
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut source = TextSource::from_text("aé");
        let tokens: Vec<Token> = CharacterTokenizer::new(&mut source).by_tokens().collect();

        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 1));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (1, 3));
    }

    #[test]
    fn test_next_without_has_next() {
        let mut source = TextSource::from_text("a");
        let mut tokenizer = CharacterTokenizer::new(&mut source);

        assert!(matches!(tokenizer.next_token(), Err(ItxError::NoTokenAvailable)));
        assert!(tokenizer.has_next());
        assert!(tokenizer.has_next());
        assert_eq!(tokenizer.next_token().unwrap().text, "a");
        assert!(matches!(tokenizer.next_token(), Err(ItxError::NoTokenAvailable)));
        assert!(!tokenizer.has_next());
        assert!(!tokenizer.has_next());
    }

    /// A reader that yields some bytes and then fails.
    struct FailingReader {
        data: io::Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                return Err(io::Error::other("device gone"));
            }
            Ok(n)
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.data.position() as usize >= self.data.get_ref().len() {
                return Err(io::Error::other("device gone"));
            }
            self.data.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.data.consume(amt)
        }
    }

    #[test]
    fn test_read_error_is_exhaustion() {
        let mut source = TextSource::from_reader(FailingReader {
            data: io::Cursor::new(b"ok".to_vec()),
        });
        let mut tokenizer = CharacterTokenizer::new(&mut source);
        let texts: Vec<String> = tokenizer.by_tokens().map(String::from).collect();

        assert_eq!(texts, vec!["o", "k"]);
        assert!(!tokenizer.has_next());
    }
}
