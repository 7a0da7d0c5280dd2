//! Utilities for glob expansion and display formatting.

use std::path::{Path, PathBuf};

/// Whether `token` contains glob metacharacters.
pub fn is_glob_pattern(token: &str) -> bool {
    token.contains(['*', '?', '['])
}

/// Expand a glob `pattern` relative to `base` into existing paths.
///
/// Relative patterns are anchored at `base`; matches come back in the
/// sorted order `glob` produces. Entries that cannot be read are skipped.
///
/// # Errors
///
/// Propagates `glob` parse errors.
pub fn expand_glob(base: &Path, pattern: &str) -> Result<Vec<PathBuf>, glob::PatternError> {
    let anchored = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let escaped_base = glob::Pattern::escape(&base.to_string_lossy());
        format!("{}/{pattern}", escaped_base.trim_end_matches('/'))
    };

    let mut resolved_paths = Vec::new();
    for entry in glob::glob(&anchored)? {
        match entry {
            Ok(path) => resolved_paths.push(path),
            Err(err) => tracing::debug!(%err, "skipping unreadable glob match"),
        }
    }

    Ok(resolved_paths)
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
