//! Output formatting for CLI commands.

use std::io::Write;

use crate::analysis::token::Token;
use crate::cli::args::OutputFormat;
use crate::error::Result;

/// Write one token as a single line in the requested format.
pub fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => output_text(out, token),
        OutputFormat::Json => output_json(out, token),
    }
}

/// Output the bare token text.
fn output_text<W: Write>(out: &mut W, token: &Token) -> Result<()> {
    writeln!(out, "{token}")?;
    Ok(())
}

/// Output the token as a compact JSON object.
fn output_json<W: Write>(out: &mut W, token: &Token) -> Result<()> {
    serde_json::to_writer(&mut *out, token)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        write_token(&mut out, &Token::new("How are you?", 0), OutputFormat::Text).unwrap();
        write_token(&mut out, &Token::new(" ", 1), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "How are you?\n \n");
    }

    #[test]
    fn test_json_output_escapes() {
        let mut out = Vec::new();
        let token = Token::with_offsets("a\"b\n", 4, 10, 14);
        write_token(&mut out, &token, OutputFormat::Json).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        let parsed: Token = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed, token);
    }
}
