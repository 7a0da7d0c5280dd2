//! CLI argument parsing for pdfcombine.
//!
//! The program is interactive, so the command line only carries
//! diagnostics. Everything else happens inside the terminal session.

use clap::Parser;
use std::path::PathBuf;

/// Collect, reorder and combine PDF files from an interactive terminal.
///
/// Paste or drop PDF paths (quoted or unquoted) into the window to add
/// them. Pasting a folder switches the working directory. Reorder with
/// Shift+Up/Down, save or load the list with `s`/`l`, merge with `m`.
#[derive(Parser, Debug, Default)]
#[command(name = "pdfcombine")]
#[command(version)]
#[command(about = "Collect, reorder and combine PDF files interactively", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Write diagnostic logs to this file
    ///
    /// The terminal is owned by the interface, so logging is disabled
    /// unless a file is given. The filter honours RUST_LOG.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
