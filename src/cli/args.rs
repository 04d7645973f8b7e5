//! Command line argument parsing for the itx CLI using clap.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TokenizeMode;

/// itx - split text into characters, words, sentences, numbers or regex matches
#[derive(Parser, Debug, Clone)]
#[command(name = "itx")]
#[command(about = "Split text into characters, words, sentences, numbers or regex matches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ItxArgs {
    /// Tokenization mode: c=chars, w=words, s=sentences, n=numbers, r=regex
    #[arg(value_name = "MODE")]
    pub mode: TokenizeMode,

    /// Input file (standard input when absent or "-")
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Regular expression, required for mode r
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", env = "ITX_FORMAT", default_value = "text")]
    pub output_format: OutputFormat,
}

impl ItxArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// The file to read, or `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Default log filter for the effective verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Token text, one per line
    Text,
    /// One JSON object per line with text, position and offsets
    Json,
}
