//! Daily trace file creation
//!
//! One `TraceFileManager` exists per category. Once per day the host asks it
//! for today's file; the manager scans the category's files, evicts the
//! oldest when the retention bound is reached, and creates a fresh, empty
//! `<prefix>_<YYYYMMDD>` file.
//!
//! ## Creation Sequence
//!
//! ```text
//! 1. scan           - list <prefix>_* files, oldest first
//! 2. evict          - delete the oldest if count == max (absent is fine)
//! 3. name           - <prefix>_<YYYYMMDD> from `now`
//! 4. replace        - delete a same-named file (same-day re-creation)
//! 5. create         - empty file, must not already exist
//! 6. settle         - optional pause for coarse filesystem timestamps
//! ```
//!
//! Calls on one manager are serialised. Two managers for different
//! categories never touch each other's files.

use crate::retention::{remove_if_exists, RetentionPolicy};
use crate::scanner::list_trace_files_with;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tcu_trace_core::{
    RetentionConfig, Result, ScanMode, TraceCategory, TraceConfig, TraceError, TraceFileName,
};
use tracing::{debug, info, warn};

/// Tunables for file creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerOptions {
    /// Pause after creating a file
    pub settle_delay: Duration,
    /// Directory enumeration strategy
    pub scan_mode: ScanMode,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        ManagerOptions {
            settle_delay: Duration::from_secs(1),
            scan_mode: ScanMode::Flat,
        }
    }
}

impl ManagerOptions {
    /// Options without a settle delay.
    pub fn immediate() -> Self {
        ManagerOptions {
            settle_delay: Duration::ZERO,
            ..Default::default()
        }
    }
}

/// Creates and retires the daily trace files of one category.
#[derive(Debug)]
pub struct TraceFileManager {
    dir: PathBuf,
    category: TraceCategory,
    policy: RetentionPolicy,
    options: ManagerOptions,
    /// Serialises scan → evict → create
    create_lock: Mutex<()>,
}

impl TraceFileManager {
    /// Manager with default options (1 s settle delay, flat scan).
    pub fn new(
        dir: impl Into<PathBuf>,
        category: TraceCategory,
        retention: RetentionConfig,
    ) -> Self {
        Self::with_options(dir, category, retention, ManagerOptions::default())
    }

    /// Manager with explicit options.
    pub fn with_options(
        dir: impl Into<PathBuf>,
        category: TraceCategory,
        retention: RetentionConfig,
        options: ManagerOptions,
    ) -> Self {
        TraceFileManager {
            dir: dir.into(),
            category,
            policy: RetentionPolicy::new(retention),
            options,
            create_lock: Mutex::new(()),
        }
    }

    /// Manager for `category` as described by `config`.
    pub fn from_config(config: &TraceConfig, category: TraceCategory) -> Self {
        Self::with_options(
            config.trace_dir.clone(),
            category,
            config.retention,
            ManagerOptions {
                settle_delay: config.settle_delay(),
                scan_mode: config.scan_mode,
            },
        )
    }

    /// Trace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Category handled by this manager.
    pub fn category(&self) -> TraceCategory {
        self.category
    }

    /// Retention policy applied on creation.
    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    /// Full path of a trace file in this manager's directory.
    ///
    /// `name` may be a scanned entry relative to the directory.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// This category's files, oldest first, relative to `dir()`.
    pub fn existing_files(&self) -> Result<Vec<String>> {
        list_trace_files_with(&self.dir, self.category.scan_prefix(), self.options.scan_mode)
    }

    /// Create an empty trace file for the day of `now`.
    ///
    /// An existing file for the same day is replaced, discarding its content.
    /// Errors are returned rather than raised; the host decides whether to
    /// retry or run without tracing for the day.
    pub fn create_todays_file(&self, now: NaiveDateTime) -> Result<TraceFileName> {
        let _guard = self.create_lock.lock();

        let files = self.existing_files()?;
        if let Some(oldest) = self.policy.evict(&files) {
            self.discard(oldest, "evicted oldest trace file");
        }

        let name = TraceFileName::for_day(self.category, now.date());
        self.discard(name.as_str(), "replaced same-day trace file");

        let path = self.path_of(name.as_str());
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| TraceError::Create {
                path: path.clone(),
                source,
            })?;

        if !self.options.settle_delay.is_zero() {
            std::thread::sleep(self.options.settle_delay);
        }

        info!(category = %self.category, file = %name, "created trace file");
        Ok(name)
    }

    /// Delete oldest files until at most `max_files()` remain.
    ///
    /// Returns the names that were removed. Unlike the daily eviction this
    /// also shrinks a directory that is already above the bound.
    pub fn prune(&self) -> Result<Vec<String>> {
        let _guard = self.create_lock.lock();

        let files = self.existing_files()?;
        let mut removed = Vec::new();
        for name in self.policy.excess(&files) {
            let path = self.path_of(name);
            if remove_if_exists(&path)? {
                info!(category = %self.category, file = %name, "pruned trace file");
                removed.push(name.clone());
            }
        }
        Ok(removed)
    }

    /// Delete-if-exists that logs instead of failing.
    fn discard(&self, name: &str, what: &str) {
        let path = self.path_of(name);
        match remove_if_exists(&path) {
            Ok(true) => debug!(category = %self.category, file = %name, "{}", what),
            Ok(false) => {}
            Err(e) => warn!(
                category = %self.category,
                path = %path.display(),
                error = %e,
                "could not delete trace file"
            ),
        }
    }
}
