//! The ordered list of documents to merge.
//!
//! Entries are absolute paths and their order is the merge order. The
//! collection never removes duplicates: adding the same file twice merges it
//! twice.

use std::path::{Path, PathBuf};

use crate::workdir::WorkingDirectory;

/// Ordered, mutable sequence of absolute document paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<PathBuf>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `paths`, resolved against `workdir`, at the end.
    ///
    /// Returns the index of the first appended entry, or `None` when `paths`
    /// was empty.
    pub fn append<I, P>(&mut self, paths: I, workdir: &WorkingDirectory) -> Option<usize>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let first = self.entries.len();
        self.entries
            .extend(paths.into_iter().map(|path| workdir.resolve(path)));
        (self.entries.len() > first).then_some(first)
    }

    /// Swap the entry at `index` with the one above it.
    ///
    /// Returns the entry's new index, or `index` unchanged when it is already
    /// first or out of range.
    pub fn swap_up(&mut self, index: usize) -> usize {
        if index == 0 || index >= self.entries.len() {
            return index;
        }
        self.entries.swap(index - 1, index);
        index - 1
    }

    /// Swap the entry at `index` with the one below it.
    ///
    /// Returns the entry's new index, or `index` unchanged when it is already
    /// last or out of range.
    pub fn swap_down(&mut self, index: usize) -> usize {
        if index + 1 >= self.entries.len() {
            return index;
        }
        self.entries.swap(index, index + 1);
        index + 1
    }

    /// Replace every entry at once.
    pub fn replace_all(&mut self, paths: Vec<PathBuf>) {
        self.entries = paths;
    }

    /// An independent copy of the entries.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.entries.clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    /// Iterate over the entries in merge order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    /// The entries as a slice.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.entries
    }
}
