//! Assembling the output document.
//!
//! [`PdfAssembler`] owns an empty document with a single flat page tree and
//! appends pages from opened inputs to it. Nothing touches the disk until
//! [`PdfAssembler::finalize`], which writes through a temporary file in the
//! target directory and only then moves it into place.
//!
//! # Examples
//!
//! ```no_run
//! use pdfcombine::io::{PdfAssembler, PdfReader};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let mut assembler = PdfAssembler::new();
//! assembler.append_pages(reader.open("a.pdf")?)?;
//! assembler.append_pages(reader.open("b.pdf")?)?;
//! let stats = assembler.finalize("combined.pdf")?;
//! println!("wrote {} pages", stats.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, Object, ObjectId, dictionary};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

use crate::error::{CombineError, Result};
use crate::io::LoadedPdf;
use crate::utils::format_file_size;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against malformed, cyclic `Parent` chains.
const MAX_TREE_DEPTH: usize = 64;

/// Statistics about a finished write.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Path the document was written to.
    pub output_path: PathBuf,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Pages in the written document.
    pub page_count: usize,

    /// Time taken to serialize and write.
    pub write_time: Duration,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Accumulates pages from several documents into one.
#[derive(Debug)]
pub struct PdfAssembler {
    document: Document,
    pages_id: ObjectId,
    page_count: usize,
}

impl PdfAssembler {
    /// Create an assembler holding an empty document.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");

        let pages_id = document.new_object_id();
        let pages = dictionary! {
            "Type" => Object::Name(b"Pages".to_vec()),
            "Kids" => Object::Array(Vec::new()),
            "Count" => Object::Integer(0),
        };
        document.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = document.add_object(dictionary! {
            "Type" => Object::Name(b"Catalog".to_vec()),
            "Pages" => Object::Reference(pages_id),
        });
        document.trailer.set("Root", Object::Reference(catalog_id));

        Self {
            document,
            pages_id,
            page_count: 0,
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Append every page of `loaded`, in its native order.
    ///
    /// The incoming objects are renumbered above the ids already in use, then
    /// each page gets its inherited attributes copied in and its `Parent`
    /// pointed at the output page tree. Returns the number of pages added.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::FailedToLoadPdf`] if a page object of the input
    /// is not a dictionary.
    pub fn append_pages(&mut self, loaded: LoadedPdf) -> Result<usize> {
        let LoadedPdf {
            mut document, path, ..
        } = loaded;

        document.renumber_objects_with(self.document.max_id + 1);
        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();

        for &page_id in &page_ids {
            let inherited = inherited_attributes(&document, page_id);
            let page = document
                .get_object_mut(page_id)
                .and_then(Object::as_dict_mut)
                .map_err(|err| CombineError::failed_to_load_pdf(&path, err.to_string()))?;

            for (key, value) in inherited {
                page.set(key, value);
            }
            page.set("Parent", Object::Reference(self.pages_id));
        }

        self.document.max_id = self.document.max_id.max(document.max_id);
        self.document.objects.extend(document.objects);

        let pages = self.document.get_object_mut(self.pages_id)?.as_dict_mut()?;
        pages
            .get_mut(b"Kids")?
            .as_array_mut()?
            .extend(page_ids.iter().map(|&id| Object::Reference(id)));

        self.page_count += page_ids.len();
        pages.set("Count", Object::Integer(self.page_count as i64));

        Ok(page_ids.len())
    }

    /// Serialize the assembled document to `path`.
    ///
    /// Unreferenced objects are pruned and streams compressed first. The
    /// bytes go to a temporary file next to `path` that is moved into place
    /// only once fully written; an existing file at `path` is never replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::FailedToWrite`] if the temporary file cannot be
    /// created or written, or if `path` already exists.
    pub fn finalize(mut self, path: impl AsRef<Path>) -> Result<WriteStatistics> {
        let path = path.as_ref();
        let start = Instant::now();

        self.document.prune_objects();
        self.document.renumber_objects();
        self.document.compress();

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_err = |reason: String| CombineError::failed_to_write(path, reason);

        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| write_err(err.to_string()))?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            self.document
                .save_to(&mut writer)
                .map_err(|err| write_err(err.to_string()))?;
            writer.flush().map_err(|err| write_err(err.to_string()))?;
        }
        tmp.persist_noclobber(path)
            .map_err(|err| write_err(err.error.to_string()))?;

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            output_path: path.to_path_buf(),
            file_size,
            page_count: self.page_count,
            write_time: start.elapsed(),
        })
    }
}

impl Default for PdfAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Attributes `page_id` lacks itself but inherits from an ancestor.
fn inherited_attributes(document: &Document, page_id: ObjectId) -> Vec<(&'static [u8], Object)> {
    let mut found = Vec::new();
    let Ok(page) = document.get_dictionary(page_id) else {
        return found;
    };

    let mut missing: Vec<&'static [u8]> = INHERITABLE
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    for _ in 0..MAX_TREE_DEPTH {
        if missing.is_empty() {
            break;
        }
        let Some(node) = parent.and_then(|id| document.get_dictionary(id).ok()) else {
            break;
        };

        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((*key, value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    found
}
