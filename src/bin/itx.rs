//! itx CLI binary.

use std::io;
use std::process;

use clap::Parser;
use itx::cli::{args::*, commands::*};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments using clap
    let args = ItxArgs::parse();

    // RUST_LOG wins over the verbosity flags
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
