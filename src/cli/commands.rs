//! Command implementations for the itx CLI.

use std::io::{self, BufWriter, Write};

use tracing::{info, warn};

use crate::analysis::tokenizer::{TextTokenizer, TokenizeMode, Tokenizer};
use crate::cli::args::{ItxArgs, OutputFormat};
use crate::cli::output::write_token;
use crate::error::{ItxError, Result};
use crate::source::TextSource;

/// Execute a CLI invocation, printing tokens to standard output.
pub fn execute_command(args: ItxArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    execute_to(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI invocation, writing tokens to `out`.
///
/// Returns the number of tokens written. Argument errors are reported before
/// any input is opened.
pub fn execute_to<W: Write>(args: &ItxArgs, out: &mut W) -> Result<usize> {
    let pattern = pattern_for(args)?;
    let mut source = open_source(args)?;

    let written = tokenize_source(args.mode, &mut source, pattern, args.output_format, out);
    source.release();
    written
}

/// The pattern to use for `args.mode`, if any.
fn pattern_for(args: &ItxArgs) -> Result<Option<&str>> {
    let pattern = args.pattern.as_deref();
    if args.mode.requires_pattern() {
        if pattern.is_none() {
            return Err(ItxError::invalid_argument(
                "Regex mode requires a pattern argument",
            ));
        }
    } else if pattern.is_some() {
        warn!(mode = ?args.mode, "pattern argument ignored outside regex mode");
    }
    Ok(pattern)
}

/// Open the file named on the command line, or standard input.
fn open_source(args: &ItxArgs) -> Result<TextSource> {
    match args.input_path() {
        Some(path) => TextSource::from_file(path),
        None => Ok(TextSource::from_stdin()),
    }
}

/// Drive the tokenizer for `mode` over `source` to exhaustion.
pub fn tokenize_source<W: Write>(
    mode: TokenizeMode,
    source: &mut TextSource,
    pattern: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let origin = source.origin().to_string();
    let mut tokenizer = TextTokenizer::new(mode, source, pattern)?;
    info!(tokenizer = tokenizer.name(), origin = %origin, "tokenizing");

    while tokenizer.has_next() {
        let token = tokenizer.next_token()?;
        write_token(out, &token, format)?;
    }

    let produced = tokenizer.tokens_produced();
    info!(tokens = produced, "done");
    Ok(produced)
}
