//! Trace directory enumeration
//!
//! Returns regular files whose name starts with a prefix, sorted ascending by
//! file name. Names carry a fixed-width date, so ascending order is oldest
//! first. Each entry is the path relative to the scanned directory: the bare
//! name in flat mode, possibly `sub/dir/<name>` in recursive mode.

use std::fs;
use std::path::Path;
use tcu_trace_core::{Result, ScanMode, TraceError};
use walkdir::WalkDir;

/// List files in `dir` (flat) whose name starts with `prefix`.
pub fn list_trace_files(dir: &Path, prefix: &str) -> Result<Vec<String>> {
    list_trace_files_with(dir, prefix, ScanMode::Flat)
}

/// List files below `dir` whose name starts with `prefix`.
///
/// Directories are never returned, even when their name matches. Names that
/// are not valid UTF-8 cannot be trace files and are skipped. Zero matches is
/// an empty list; an unreadable or missing directory is `TraceError::Scan`.
pub fn list_trace_files_with(dir: &Path, prefix: &str, mode: ScanMode) -> Result<Vec<String>> {
    let mut files = match mode {
        ScanMode::Flat => scan_flat(dir, prefix)?,
        ScanMode::Recursive => scan_tree(dir, prefix)?,
    };
    files.sort_by(|a, b| base_name(a).cmp(base_name(b)).then_with(|| a.cmp(b)));
    Ok(files)
}

/// Final component of a scanned entry.
pub fn base_name(entry: &str) -> &str {
    Path::new(entry)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(entry)
}

fn scan_flat(dir: &Path, prefix: &str) -> Result<Vec<String>> {
    let scan_err = |source| TraceError::Scan {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        // Symlinked directories count as directories; dangling links do not.
        let is_dir = entry.file_type().map_err(scan_err)?.is_dir() || entry.path().is_dir();
        if is_dir {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.starts_with(prefix) {
                files.push(name.to_string());
            }
        }
    }
    Ok(files)
}

fn scan_tree(dir: &Path, prefix: &str) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| TraceError::Scan {
            dir: dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(prefix));
        if !matches {
            continue;
        }
        if let Some(relative) = entry
            .path()
            .strip_prefix(dir)
            .ok()
            .and_then(|rel| rel.to_str())
        {
            files.push(relative.to_string());
        }
    }
    Ok(files)
}
