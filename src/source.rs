//! Text sources for the tokenizers.
//!
//! A [`TextSource`] wraps a buffered character stream and offers the two
//! access modes the tokenizers need: incremental single-character pulls for
//! the streaming tokenizers and one-shot materialization for the buffering
//! ones.
//!
//! A source created from a file owns its handle and closes it on
//! [`TextSource::release`] or when dropped, whichever comes first. A source
//! over standard input (or any caller-supplied reader) never closes the
//! underlying stream.
//!
//! # Examples
//!
//! ```
//! use itx::source::TextSource;
//!
//! let mut source = TextSource::from_text("héllo");
//! assert_eq!(source.read_char().unwrap(), Some('h'));
//! assert_eq!(source.read_char().unwrap(), Some('é'));
//! assert_eq!(source.read_all().unwrap(), "llo");
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;

use tracing::debug;
use utf8_chars::BufReadCharsExt;

use crate::error::{ItxError, Result};

/// A character stream backed by a file, standard input, or an arbitrary reader.
pub struct TextSource {
    /// `None` once an owned stream has been released.
    reader: Option<Box<dyn BufRead>>,
    owns_stream: bool,
    origin: String,
}

impl TextSource {
    /// Open `path` for reading. The returned source owns the file handle.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ItxError::file(path, e))?;
        debug!(path = %path.display(), "opened file source");

        Ok(TextSource {
            reader: Some(Box::new(BufReader::new(file))),
            owns_stream: true,
            origin: path.display().to_string(),
        })
    }

    /// Read from the process's standard input. Never fails at open time.
    pub fn from_stdin() -> Self {
        debug!("reading from standard input");
        Self::from_reader_named(io::stdin().lock(), "<stdin>")
    }

    /// Wrap a caller-supplied reader. The source does not own it.
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self::from_reader_named(reader, "<reader>")
    }

    /// A source over an in-memory string.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self::from_reader_named(Cursor::new(text.into()), "<text>")
    }

    fn from_reader_named<R: BufRead + 'static>(reader: R, origin: &str) -> Self {
        TextSource {
            reader: Some(Box::new(reader)),
            owns_stream: false,
            origin: origin.to_string(),
        }
    }

    /// Read the next character, or `None` at end of stream.
    ///
    /// Bytes that are not valid UTF-8 surface as an `InvalidData` I/O error.
    pub fn read_char(&mut self) -> Result<Option<char>> {
        match self.reader.as_mut() {
            Some(reader) => Ok(reader.read_char()?),
            None => Ok(None),
        }
    }

    /// Read everything that remains in the stream.
    ///
    /// This drains the source: a second call returns an empty string.
    pub fn read_all(&mut self) -> Result<String> {
        let mut text = String::new();
        if let Some(reader) = self.reader.as_mut() {
            reader.read_to_string(&mut text)?;
        }
        debug!(origin = %self.origin, bytes = text.len(), "materialized source");
        Ok(text)
    }

    /// Whether this source closes its stream on release.
    pub fn owns_stream(&self) -> bool {
        self.owns_stream
    }

    /// Whether an owned stream has already been closed.
    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }

    /// A human readable name for where the text comes from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Close the underlying stream if this source owns it.
    ///
    /// Safe to call any number of times; the handle is closed exactly once.
    /// A no-op for sources that do not own their stream.
    pub fn release(&mut self) {
        if !self.owns_stream {
            return;
        }
        if let Some(reader) = self.reader.take() {
            drop(reader);
            debug!(origin = %self.origin, "released source");
        }
    }
}

impl Drop for TextSource {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSource")
            .field("origin", &self.origin)
            .field("owns_stream", &self.owns_stream)
            .field("released", &self.is_released())
            .finish()
    }
}
