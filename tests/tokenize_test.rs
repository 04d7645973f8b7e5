//! Integration tests for the five tokenization modes over file and text sources.

use std::io::Write;

use itx::prelude::*;
use tempfile::NamedTempFile;

const ALL_MODES: [TokenizeMode; 5] = [
    TokenizeMode::Chars,
    TokenizeMode::Words,
    TokenizeMode::Sentences,
    TokenizeMode::Numbers,
    TokenizeMode::Regex,
];

fn tokens(mode: TokenizeMode, text: &str, pattern: Option<&str>) -> Result<Vec<String>> {
    let mut source = TextSource::from_text(text);
    let tokenizer = TextTokenizer::new(mode, &mut source, pattern)?;
    Ok(tokenizer.map(String::from).collect())
}

fn file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_characters_round_trip() -> Result<()> {
    let text = "Tabs\tand\nnewlines, ünïcödé too.\r\n";
    let chars = tokens(TokenizeMode::Chars, text, None)?;

    assert_eq!(chars.len(), text.chars().count());
    assert!(chars.iter().all(|c| c.chars().count() == 1));
    assert_eq!(chars.concat(), text);
    Ok(())
}

#[test]
fn test_words_are_whitespace_delimited() -> Result<()> {
    let text = "\n  the quick\tbrown\r\nfox\x0c jumps\u{a0}over  ";
    let words = tokens(TokenizeMode::Words, text, None)?;

    assert_eq!(words, vec!["the", "quick", "brown", "fox", "jumps\u{a0}over"]);
    assert!(words.iter().all(|w| !w.is_empty()));
    Ok(())
}

#[test]
fn test_documented_examples() -> Result<()> {
    assert_eq!(
        tokens(TokenizeMode::Sentences, "Hello world. How are you? Fine!", None)?,
        vec!["Hello world.", "How are you?", "Fine!"]
    );
    assert_eq!(
        tokens(TokenizeMode::Numbers, "a1 -2.5 three 007 +8", None)?,
        vec!["1", "-2.5", "007", "+8"]
    );
    assert_eq!(
        tokens(TokenizeMode::Regex, "ab12cd34", Some(r"\d+"))?,
        vec!["12", "34"]
    );
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    for mode in ALL_MODES {
        assert!(tokens(mode, "", None)?.is_empty(), "mode {mode:?}");
    }
    Ok(())
}

#[test]
fn test_exhaustion_is_permanent() -> Result<()> {
    for mode in ALL_MODES {
        let mut source = TextSource::from_text("One 2. Three!");
        let mut tokenizer = TextTokenizer::new(mode, &mut source, Some(r"\w"))?;

        let mut seen = 0;
        while tokenizer.has_next() {
            tokenizer.next_token()?;
            seen += 1;
        }
        assert!(seen > 0, "mode {mode:?}");
        assert_eq!(tokenizer.tokens_produced(), seen);

        for _ in 0..5 {
            assert!(!tokenizer.has_next());
            let err = tokenizer.next_token().unwrap_err();
            assert!(err.is_no_token_available(), "mode {mode:?}");
        }
        assert_eq!(tokenizer.next(), None);
    }
    Ok(())
}

#[test]
fn test_file_source_in_every_mode() -> Result<()> {
    let file = file_with("Pay 12.50 now. Or 3 later?\n");

    let expected: [(TokenizeMode, Vec<&str>); 4] = [
        (TokenizeMode::Words, vec!["Pay", "12.50", "now.", "Or", "3", "later?"]),
        (TokenizeMode::Sentences, vec!["Pay 12.", "50 now.", "Or 3 later?"]),
        (TokenizeMode::Numbers, vec!["12.50", "3"]),
        (TokenizeMode::Regex, vec!["Pay 12.50 now. Or 3 later?"]),
    ];

    for (mode, want) in expected {
        let mut source = TextSource::from_file(file.path())?;
        assert!(source.owns_stream());
        let got: Vec<String> = TextTokenizer::new(mode, &mut source, None)?
            .map(String::from)
            .collect();
        assert_eq!(got, want, "mode {mode:?}");

        source.release();
        source.release();
        assert!(source.is_released());
    }
    Ok(())
}

#[test]
fn test_missing_file_is_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");

    let err = TextSource::from_file(&missing).unwrap_err();
    assert!(matches!(err, ItxError::File { .. }));
}

#[test]
fn test_invalid_pattern_fails_before_tokens() {
    let mut source = TextSource::from_text("(a)(b)");
    let err = TextTokenizer::new(TokenizeMode::Regex, &mut source, Some("(a")).unwrap_err();
    assert!(matches!(err, ItxError::InvalidPattern(_)));
}

#[test]
fn test_invalid_utf8_in_buffering_mode_is_io_error() {
    let mut source = TextSource::from_reader(std::io::Cursor::new(vec![b'1', 0xc3, 0x28]));
    let err = TextTokenizer::new(TokenizeMode::Numbers, &mut source, None).unwrap_err();
    assert!(matches!(err, ItxError::Io(_)));
}
