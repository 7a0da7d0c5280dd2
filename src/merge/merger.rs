//! Core merge implementation.
//!
//! Reads each document in list order and appends all of its pages to one
//! output document. The first failure aborts the whole merge and nothing is
//! written.

use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{CombineError, Result};
use crate::io::{PdfAssembler, PdfReader};
use crate::utils::format_file_size;

/// Where merged documents go and how they are named.
///
/// Names follow `<prefix>-<YYYYMMDDHHMMSS>.<extension>`; when that name is
/// taken a `-1`, `-2`, … suffix is added before the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    /// Directory the output is written to.
    pub dir: PathBuf,

    /// File name prefix.
    pub prefix: String,

    /// File extension, without the dot.
    pub extension: String,
}

impl OutputNaming {
    /// Naming rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// First unused output path for a merge finishing at `time`.
    pub fn path_at<Tz>(&self, time: &DateTime<Tz>) -> PathBuf
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let stem = format!("{}-{}", self.prefix, time.format("%Y%m%d%H%M%S"));
        let candidate = self.dir.join(format!("{stem}.{}", self.extension));
        if !candidate.exists() {
            return candidate;
        }

        (1..)
            .map(|n| self.dir.join(format!("{stem}-{n}.{}", self.extension)))
            .find(|path| !path.exists())
            .unwrap_or(candidate)
    }
}

/// Statistics about a finished merge.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// The document that was created.
    pub output_path: PathBuf,

    /// Number of input documents merged.
    pub files_merged: usize,

    /// Pages in the created document.
    pub total_pages: usize,

    /// Size of the created document in bytes.
    pub file_size: u64,

    /// Total time taken, reading and writing.
    pub merge_time: Duration,
}

impl MergeReport {
    /// Format output size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }

    /// File name of the created document.
    pub fn file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_path.display().to_string())
    }
}

/// Combines documents into one.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
        }
    }

    /// Merge `paths` in order into a new document named by `naming`.
    ///
    /// The output name is chosen from the local time once every page has been
    /// collected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `paths` is empty
    /// - any document cannot be opened or parsed
    /// - the output cannot be written
    pub fn merge(&self, paths: &[PathBuf], naming: &OutputNaming) -> Result<MergeReport> {
        if paths.is_empty() {
            return Err(CombineError::NothingToMerge);
        }

        let start = Instant::now();
        let mut assembler = PdfAssembler::new();

        for (idx, path) in paths.iter().enumerate() {
            let loaded = self.reader.open(path)?;
            let added = assembler.append_pages(loaded)?;
            tracing::debug!(
                "[{}/{}] {} → {added} pages",
                idx + 1,
                paths.len(),
                display_name(path)
            );
        }

        let output_path = naming.path_at(&chrono::Local::now());
        let stats = assembler.finalize(&output_path)?;

        Ok(MergeReport {
            output_path: stats.output_path,
            files_merged: paths.len(),
            total_pages: stats.page_count,
            file_size: stats.file_size,
            merge_time: start.elapsed(),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
