//! Configuration for a pdfcombine session.
//!
//! Holds the well-known file names and the document suffix. The values are
//! fixed; only the diagnostics switch comes from the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;
use crate::error::{CombineError, Result};

/// Name of the persisted list file, relative to the working directory.
pub const LIST_FILE: &str = "combine_pdf.json";

/// Suffix (without dot) of documents accepted from pasted text.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Stem prefix of merged output files.
pub const OUTPUT_PREFIX: &str = "combined";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File name of the persisted list.
    pub list_file: PathBuf,

    /// Accepted document extension, compared case-insensitively.
    pub extension: String,

    /// Prefix of generated output file names.
    pub output_prefix: String,

    /// Optional diagnostics log destination.
    pub log_file: Option<PathBuf>,

    /// How long the UI waits for input before polling the merge job.
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_file: PathBuf::from(LIST_FILE),
            extension: DOCUMENT_EXTENSION.to_string(),
            output_prefix: OUTPUT_PREFIX.to_string(),
            log_file: None,
            tick: Duration::from_millis(250),
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = CombineError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = Self {
            log_file: cli.log_file.clone(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the list file, extension or output prefix is empty,
    /// or if the list file is not a bare file name.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(CombineError::other("Document extension cannot be empty"));
        }

        if self.output_prefix.is_empty() {
            return Err(CombineError::other("Output prefix cannot be empty"));
        }

        if self.list_file.as_os_str().is_empty() || self.list_file.components().count() != 1 {
            return Err(CombineError::other(format!(
                "List file must be a plain file name: {}",
                self.list_file.display()
            )));
        }

        Ok(())
    }

    /// Whether `path` ends in `.` plus the accepted extension, ignoring case.
    ///
    /// A bare `.pdf` counts too.
    pub fn is_document(&self, path: impl AsRef<Path>) -> bool {
        let name = path.as_ref().to_string_lossy().to_lowercase();
        let suffix = format!(".{}", self.extension.to_lowercase());
        name.ends_with(&suffix)
    }
}
