//! Saving and loading the document list.
//!
//! The list lives in a JSON array of absolute path strings inside the
//! working directory. Loading is all-or-nothing: if any listed file has
//! disappeared the whole list is rejected and the first missing entry is
//! reported.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{CombineError, Result};
use crate::workdir::WorkingDirectory;

/// On-disk form of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedList {
    paths: Vec<PathBuf>,
}

impl PersistedList {
    /// Wrap `paths` for saving.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// The listed paths, in order.
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    /// First entry that does not exist on disk.
    fn first_missing(&self) -> Option<&Path> {
        self.paths
            .iter()
            .map(PathBuf::as_path)
            .find(|path| !path.exists())
    }
}

/// Reads and writes the list file in a working directory.
#[derive(Debug, Clone)]
pub struct ListStore {
    file_name: PathBuf,
}

impl ListStore {
    /// A store using `file_name` inside whatever directory is passed to
    /// [`save`](Self::save) and [`load`](Self::load).
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Full path of the list file in `workdir`.
    pub fn path_in(&self, workdir: &WorkingDirectory) -> PathBuf {
        workdir.join(&self.file_name)
    }

    /// Write `paths` as a pretty-printed JSON array, replacing any previous
    /// list. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::FailedToSaveList`] if the file cannot be written
    /// or a path is not valid UTF-8.
    pub fn save(&self, paths: &[PathBuf], workdir: &WorkingDirectory) -> Result<PathBuf> {
        let path = self.path_in(workdir);
        let save_err = |source: io::Error| CombineError::FailedToSaveList {
            path: path.clone(),
            source,
        };

        let json = serde_json::to_string_pretty(&PersistedList::new(paths.to_vec()))
            .map_err(|err| save_err(io::Error::other(err)))?;

        let mut tmp = NamedTempFile::new_in(workdir.path()).map_err(save_err)?;
        tmp.write_all(json.as_bytes()).map_err(save_err)?;
        tmp.write_all(b"\n").map_err(save_err)?;
        tmp.flush().map_err(save_err)?;
        tmp.persist(&path).map_err(|err| save_err(err.error))?;

        tracing::info!(path = %path.display(), entries = paths.len(), "saved list");
        Ok(path)
    }

    /// Read the list and check that every entry still exists.
    ///
    /// Relative entries in a hand-edited file are resolved against `workdir`.
    ///
    /// # Errors
    ///
    /// - [`CombineError::FailedToReadList`] if the file is missing or unreadable
    /// - [`CombineError::InvalidList`] if it is not a JSON array of strings
    /// - [`CombineError::MissingReference`] naming the first listed path that
    ///   no longer exists
    pub fn load(&self, workdir: &WorkingDirectory) -> Result<Vec<PathBuf>> {
        let path = self.path_in(workdir);

        let content = fs::read_to_string(&path).map_err(|source| CombineError::FailedToReadList {
            path: path.clone(),
            source,
        })?;
        let list: PersistedList =
            serde_json::from_str(&content).map_err(|source| CombineError::InvalidList {
                path: path.clone(),
                source,
            })?;
        let list = PersistedList::new(
            list.into_paths()
                .into_iter()
                .map(|entry| workdir.resolve(entry))
                .collect(),
        );

        if let Some(missing) = list.first_missing() {
            tracing::warn!(missing = %missing.display(), "rejected list with missing entry");
            return Err(CombineError::missing_reference(missing));
        }

        tracing::info!(path = %path.display(), entries = list.paths.len(), "loaded list");
        Ok(list.into_paths())
    }
}
