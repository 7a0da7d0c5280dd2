//! Error types for pdfcombine.
//!
//! Every failure the core can produce is a [`CombineError`]. None of them are
//! meant to reach the user as a crash: the session converts each one into a
//! short status line with [`CombineError::status_text`].
//!
//! # Error Categories
//!
//! - **List errors**: the persisted list could not be read, parsed or written,
//!   or it references a file that no longer exists
//! - **Read errors**: an input document is missing or could not be parsed
//! - **Write errors**: the merged document could not be written
//! - **Merge guards**: nothing to merge, or a merge is already running

use std::io;
use std::path::{Path, PathBuf};

/// Result type alias for pdfcombine operations.
pub type Result<T> = std::result::Result<T, CombineError>;

/// Main error type for pdfcombine operations.
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    /// The persisted list file is missing or unreadable.
    #[error("Failed to read list file: {}\n  Reason: {source}", .path.display())]
    FailedToReadList {
        /// Path to the list file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The persisted list file is not a JSON array of strings.
    #[error("Invalid list file: {}\n  Reason: {source}", .path.display())]
    InvalidList {
        /// Path to the list file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The list file could not be written.
    #[error("Failed to save list file: {}\n  Reason: {source}", .path.display())]
    FailedToSaveList {
        /// Path to the list file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A listed document no longer exists on disk.
    #[error("Listed file no longer exists: {}", .path.display())]
    MissingReference {
        /// First missing path in list order.
        path: PathBuf,
    },

    /// An input document was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the document.
        path: PathBuf,
    },

    /// An input document could not be parsed.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the document.
        path: PathBuf,
        /// Reason reported by the codec.
        reason: String,
    },

    /// The merged document could not be written.
    #[error("Failed to write output file: {}\n  Reason: {reason}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The merge stopped before producing output.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// A merge was requested with an empty collection.
    #[error("No PDF files to merge")]
    NothingToMerge,

    /// A merge was requested while another one has not finished.
    #[error("A merge is already in progress")]
    MergeInProgress,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for CombineError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl CombineError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FailedToWrite error.
    pub fn failed_to_write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToWrite {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create a MissingReference error.
    pub fn missing_reference(path: impl Into<PathBuf>) -> Self {
        Self::MissingReference { path: path.into() }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether the error came from saving or loading the persisted list.
    pub fn is_list_error(&self) -> bool {
        matches!(
            self,
            Self::FailedToReadList { .. }
                | Self::InvalidList { .. }
                | Self::FailedToSaveList { .. }
                | Self::MissingReference { .. }
        )
    }

    /// One-line description suitable for the status area.
    ///
    /// Reasons are kept but multi-line hints are dropped, and a missing list
    /// entry is reported by its base name only.
    pub fn status_text(&self) -> String {
        match self {
            Self::FailedToSaveList { source, .. } => format!("Save err: {source}"),
            Self::FailedToReadList { source, .. } => format!("Load err: {source}"),
            Self::InvalidList { source, .. } => format!("Load err: {source}"),
            Self::MissingReference { path } => format!("Missing: {}", base_name(path)),
            Self::FileNotFound { path } => format!("Error: file not found: {}", base_name(path)),
            Self::FailedToLoadPdf { path, reason } => {
                format!("Error: {}: {reason}", base_name(path))
            }
            Self::FailedToWrite { reason, .. } => format!("Error: {reason}"),
            Self::MergeFailed { reason } => format!("Error: {reason}"),
            other => format!("Error: {other}"),
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
