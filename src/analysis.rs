//! Text analysis module for itx.
//!
//! This module provides the tokens and the tokenizers that turn a
//! [`TextSource`](crate::source::TextSource) into a lazy sequence of them.

pub mod token;
pub mod tokenizer;
