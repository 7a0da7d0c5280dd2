//! The working directory of a session.
//!
//! Relative tokens, the list file and merge output are all resolved against a
//! [`WorkingDirectory`] value owned by the session. The process cwd is only
//! read once at startup and never changed.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Directory used to resolve relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory {
    path: PathBuf,
}

impl WorkingDirectory {
    /// Create a working directory rooted at `path`.
    ///
    /// A relative `path` is taken relative to the process cwd.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let path = if path.is_absolute() {
            normalize(path)
        } else {
            normalize(&std::env::current_dir()?.join(path))
        };
        Ok(Self { path })
    }

    /// Start from the process cwd.
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self {
            path: std::env::current_dir()?,
        })
    }

    /// The current directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute, lexically normalized form of `token`.
    ///
    /// `.` and `..` components are folded without touching the file system,
    /// so symlinks are kept as written.
    pub fn resolve(&self, token: impl AsRef<Path>) -> PathBuf {
        let token = token.as_ref();
        if token.is_absolute() {
            normalize(token)
        } else {
            normalize(&self.path.join(token))
        }
    }

    /// A file inside the current directory.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.path.join(name)
    }

    /// Switch to the directory named by the last directory token.
    ///
    /// Every token naming an existing directory is removed from the stream so
    /// it is never mistaken for a document. When at least one is present the
    /// working directory moves to the last of them and the new directory is
    /// returned alongside the remaining tokens.
    pub fn absorb_directories(&mut self, tokens: Vec<String>) -> (Vec<String>, Option<PathBuf>) {
        let directories: Vec<&String> = tokens
            .iter()
            .filter(|token| self.resolve(token).is_dir())
            .collect();

        let Some(last) = directories.last() else {
            return (tokens, None);
        };

        let target = self.resolve(last);
        self.path = std::fs::canonicalize(&target).unwrap_or(target);
        tracing::info!(dir = %self.path.display(), "working directory changed");

        let directories: Vec<String> = directories.into_iter().cloned().collect();
        let remaining = tokens
            .into_iter()
            .filter(|token| !directories.contains(token))
            .collect();

        (remaining, Some(self.path.clone()))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(component);
                }
            }
            Component::RootDir => {
                normalized.push(component);
            }
            other => normalized.push(other),
        }
    }
    normalized
}
