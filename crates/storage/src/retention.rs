//! Retention decisions
//!
//! Eviction is decided here and carried out by the file manager. The daily
//! rule fires only when the category holds exactly the configured number of
//! files; a directory already above the bound (because the bound was
//! lowered) is left alone until [`RetentionPolicy::excess`] is applied
//! through an explicit prune.

use std::io;
use std::path::Path;
use tcu_trace_core::RetentionConfig;

/// File to delete before creating a new one, if any.
///
/// `files` must be sorted oldest first, as the scanner returns them.
pub fn evict(files: &[String], max_count: usize) -> Option<&str> {
    if !files.is_empty() && files.len() == max_count {
        files.first().map(String::as_str)
    } else {
        None
    }
}

/// Delete `path` if it exists.
///
/// Returns `Ok(true)` when a file was removed and `Ok(false)` when there was
/// nothing to remove. Any other failure is returned to the caller.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Retention bound for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    config: RetentionConfig,
}

impl RetentionPolicy {
    /// Policy enforcing `config`.
    pub fn new(config: RetentionConfig) -> Self {
        RetentionPolicy { config }
    }

    /// Maximum number of files kept.
    pub fn max_files(&self) -> usize {
        self.config.max_nr_of_trace_days()
    }

    /// File to evict before today's file is created.
    pub fn evict<'a>(&self, files: &'a [String]) -> Option<&'a str> {
        evict(files, self.max_files())
    }

    /// Oldest files beyond the bound.
    ///
    /// Removing all of them leaves exactly `max_files()` files.
    pub fn excess<'a>(&self, files: &'a [String]) -> &'a [String] {
        let over = files.len().saturating_sub(self.max_files());
        &files[..over]
    }
}
