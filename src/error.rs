//! Error types for the itx library.
//!
//! All errors are represented by the [`ItxError`] enum. Construction-time
//! failures (a file that cannot be opened, a pattern that does not compile, a
//! buffering tokenizer whose input cannot be read) are returned to the caller;
//! read failures after construction are absorbed by the streaming tokenizers
//! as end of stream and never show up here.
//!
//! # Examples
//!
//! ```
//! use itx::error::{ItxError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ItxError::invalid_argument("Regex mode requires a pattern argument"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for itx operations.
#[derive(Error, Debug)]
pub enum ItxError {
    /// A file could not be opened (missing, unreadable, a directory, ...).
    #[error("cannot open {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O errors while reading an already opened source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The supplied pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// `next_token` was called with no token available.
    #[error("No token available")]
    NoTokenAvailable,

    /// Invalid command line usage that clap cannot reject on its own.
    #[error("{0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ItxError.
pub type Result<T> = std::result::Result<T, ItxError>;

impl ItxError {
    /// Create a new file error for `path`.
    pub fn file<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ItxError::File {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid pattern error.
    pub fn invalid_pattern<S: Into<String>>(msg: S) -> Self {
        ItxError::InvalidPattern(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ItxError::InvalidArgument(msg.into())
    }

    /// Whether this error is a pull-protocol violation rather than a runtime failure.
    pub fn is_no_token_available(&self) -> bool {
        matches!(self, ItxError::NoTokenAvailable)
    }
}
