//! # itx
//!
//! Lazy text tokenization over files and standard input.
//!
//! ## Features
//!
//! - Streaming character and word tokenizers
//! - Buffering sentence, number and regex tokenizers
//! - One shared pull protocol: `has_next` / `next_token`
//! - File sources that are closed exactly once, on every exit path

pub mod analysis;
pub mod cli;
pub mod error;
pub mod source;

pub mod prelude {
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::{TextTokenizer, TokenizeMode, Tokenizer};
    pub use crate::error::{ItxError, Result};
    pub use crate::source::TextSource;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
