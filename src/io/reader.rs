//! Opening input documents.
//!
//! # Examples
//!
//! ```no_run
//! use pdfcombine::io::PdfReader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::new().open("input.pdf")?;
//! println!("{} has {} pages", loaded.path.display(), loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{CombineError, Result};

/// A document opened for reading.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The parsed document.
    pub document: Document,

    /// Path it was read from.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to parse the document.
    pub load_time: Duration,
}

impl LoadedPdf {
    /// Page object ids in native page order.
    pub fn pages(&self) -> Vec<ObjectId> {
        self.document.get_pages().into_values().collect()
    }
}

/// Reader for input documents.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Open and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::FileNotFound`] if nothing exists at `path`, and
    /// [`CombineError::FailedToLoadPdf`] if it is a directory or cannot be
    /// parsed.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<LoadedPdf> {
        let path = path.as_ref();

        if !path.try_exists()? {
            return Err(CombineError::file_not_found(path));
        }
        if path.is_dir() {
            return Err(CombineError::failed_to_load_pdf(path, "is a directory"));
        }

        let start = Instant::now();
        let document = Document::load(path)
            .map_err(|err| CombineError::failed_to_load_pdf(path, err.to_string()))?;

        let page_count = document.get_pages().len();
        tracing::debug!(path = %path.display(), page_count, "opened document");

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            load_time: start.elapsed(),
        })
    }
}
