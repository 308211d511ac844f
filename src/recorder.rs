//! Daily trace recorder.
//!
//! `TraceRecorder` is what the controller talks to. It owns one
//! [`TraceFileManager`] per category, remembers which file is today's for
//! each category, and routes trace lines to it through a shared
//! [`TraceAppender`].
//!
//! Rotation never fails the caller: a category whose file could not be
//! created simply records nothing until the next successful rotation.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tcu_trace_core::{Clock, SystemClock, TraceCategory, TraceConfig, TraceFileName, TraceFlag};
use tcu_trace_storage::{TraceAppender, TraceFileManager};
use tracing::{debug, info, warn};

/// Outcome of a rotation over one or more categories.
#[derive(Debug, Default)]
pub struct RotationReport {
    /// Files created, in category order
    pub created: Vec<TraceFileName>,
    /// Categories that could not get a file, with the reason
    pub failed: Vec<(TraceCategory, Error)>,
}

impl RotationReport {
    /// True when every rotated category got its file.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// True when nothing needed rotating.
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.failed.is_empty()
    }
}

/// Keeps today's trace file per category and appends lines to it.
pub struct TraceRecorder {
    config: TraceConfig,
    clock: Arc<dyn Clock>,
    appender: TraceAppender,
    state: TraceFileManager,
    temperature: TraceFileManager,
    /// Today's file per category; absent until the first successful rotation
    active: Mutex<BTreeMap<TraceCategory, TraceFileName>>,
}

impl fmt::Debug for TraceRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceRecorder")
            .field("config", &self.config)
            .field("tracing", &self.appender.flag().is_enabled())
            .field("active", &*self.active.lock())
            .finish()
    }
}

impl TraceRecorder {
    /// Open a recorder with the system clock and a fresh flag.
    ///
    /// No files are created until [`rotate`](Self::rotate) or
    /// [`rotate_if_due`](Self::rotate_if_due) is called.
    pub fn open(config: TraceConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder.
    pub fn builder() -> TraceRecorderBuilder {
        TraceRecorderBuilder::new()
    }

    /// Configuration in use.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Trace directory.
    pub fn trace_dir(&self) -> &Path {
        &self.config.trace_dir
    }

    /// Shared tracing switch.
    pub fn flag(&self) -> &TraceFlag {
        self.appender.flag()
    }

    /// Manager for one category.
    pub fn manager(&self, category: TraceCategory) -> &TraceFileManager {
        match category {
            TraceCategory::State => &self.state,
            TraceCategory::Temperature => &self.temperature,
        }
    }

    /// Path of today's file for `category`, if one is open.
    pub fn active_file(&self, category: TraceCategory) -> Option<PathBuf> {
        self.active
            .lock()
            .get(&category)
            .map(|name| self.manager(category).path_of(name.as_str()))
    }

    /// Day covered by the active file of `category`.
    pub fn active_date(&self, category: TraceCategory) -> Option<NaiveDate> {
        self.active.lock().get(&category).map(TraceFileName::date)
    }

    /// Create today's file for every category.
    pub fn rotate(&self) -> RotationReport {
        self.rotate_at(self.clock.now())
    }

    /// Create the file for the day of `now` for every category.
    pub fn rotate_at(&self, now: NaiveDateTime) -> RotationReport {
        self.rotate_categories(TraceCategory::ALL, now)
    }

    /// Rotate only categories whose active file is not today's.
    pub fn rotate_if_due(&self) -> RotationReport {
        self.rotate_if_due_at(self.clock.now())
    }

    /// Rotate only categories whose active file is not for the day of `now`.
    pub fn rotate_if_due_at(&self, now: NaiveDateTime) -> RotationReport {
        let today = now.date();
        let due: Vec<TraceCategory> = TraceCategory::ALL
            .into_iter()
            .filter(|c| self.active_date(*c) != Some(today))
            .collect();
        self.rotate_categories(due, now)
    }

    /// Pick up today's files left by an earlier run.
    ///
    /// A category whose file for today already exists keeps it, content and
    /// all; the others get a fresh file. Use this instead of
    /// [`rotate`](Self::rotate) after a restart within the same day.
    pub fn resume(&self) -> RotationReport {
        self.resume_at(self.clock.now())
    }

    /// [`resume`](Self::resume) for the day of `now`.
    pub fn resume_at(&self, now: NaiveDateTime) -> RotationReport {
        let mut report = RotationReport::default();
        for category in TraceCategory::ALL {
            match self.resume_category(category, now) {
                Ok(Some(name)) => report.created.push(name),
                Ok(None) => {}
                Err(e) => report.failed.push((category, e)),
            }
        }
        report
    }

    /// Adopt today's file for `category` if it exists, else create it.
    ///
    /// Returns the name only when a file had to be created.
    pub fn resume_category(
        &self,
        category: TraceCategory,
        now: NaiveDateTime,
    ) -> Result<Option<TraceFileName>> {
        let name = TraceFileName::for_day(category, now.date());
        if self.manager(category).path_of(name.as_str()).is_file() {
            debug!(category = %category, file = %name, "resuming trace file");
            self.active.lock().insert(category, name);
            return Ok(None);
        }
        self.rotate_category(category, now).map(Some)
    }

    /// Create the file for the day of `now` for one category.
    ///
    /// On failure the category's previous file is dropped, so later lines
    /// are skipped rather than written to a stale day.
    pub fn rotate_category(
        &self,
        category: TraceCategory,
        now: NaiveDateTime,
    ) -> Result<TraceFileName> {
        // The manager serialises creation itself; the map lock is only held
        // for the swap so producers are not stalled by the settle delay.
        match self.manager(category).create_todays_file(now) {
            Ok(name) => {
                self.active.lock().insert(category, name.clone());
                Ok(name)
            }
            Err(e) => {
                self.active.lock().remove(&category);
                warn!(category = %category, error = %e, "trace file rotation failed");
                Err(e.into())
            }
        }
    }

    fn rotate_categories(
        &self,
        categories: impl IntoIterator<Item = TraceCategory>,
        now: NaiveDateTime,
    ) -> RotationReport {
        let mut report = RotationReport::default();
        for category in categories {
            match self.rotate_category(category, now) {
                Ok(name) => report.created.push(name),
                Err(e) => report.failed.push((category, e)),
            }
        }
        if !report.is_empty() {
            info!(
                created = report.created.len(),
                failed = report.failed.len(),
                "trace rotation finished"
            );
        }
        report
    }

    /// Append a line to today's file for `category`, stamped with the clock.
    pub fn trace(&self, category: TraceCategory, args: fmt::Arguments<'_>) {
        self.trace_at(category, self.clock.now(), args)
    }

    /// Append a line stamped with `now` to the active file for `category`.
    ///
    /// Best effort: skipped while tracing is off or no file is active, and
    /// write failures are only logged.
    pub fn trace_at(
        &self,
        category: TraceCategory,
        now: NaiveDateTime,
        args: fmt::Arguments<'_>,
    ) {
        if !self.flag().is_enabled() {
            return;
        }
        match self.active_file(category) {
            Some(path) => self.appender.append(&path, now, args),
            None => debug!(category = %category, "no active trace file, line skipped"),
        }
    }

    /// Like [`trace_at`](Self::trace_at) but reports what happened.
    ///
    /// Returns `Ok(false)` when tracing is off.
    pub fn try_trace_at(
        &self,
        category: TraceCategory,
        now: NaiveDateTime,
        args: fmt::Arguments<'_>,
    ) -> Result<bool> {
        if !self.flag().is_enabled() {
            return Ok(false);
        }
        let path = self
            .active_file(category)
            .ok_or(Error::NoActiveFile(category))?;
        Ok(self.appender.try_append(&path, now, args)?)
    }

    /// Retained files of `category`, oldest first.
    pub fn list(&self, category: TraceCategory) -> Result<Vec<String>> {
        Ok(self.manager(category).existing_files()?)
    }

    /// Shrink every category to the retention bound.
    ///
    /// Returns the removed file names.
    pub fn prune(&self) -> Result<Vec<String>> {
        let mut removed = Vec::new();
        for category in TraceCategory::ALL {
            removed.extend(self.manager(category).prune()?);
        }
        Ok(removed)
    }
}

/// Builder for [`TraceRecorder`].
pub struct TraceRecorderBuilder {
    config: TraceConfig,
    clock: Option<Arc<dyn Clock>>,
    flag: Option<TraceFlag>,
}

impl TraceRecorderBuilder {
    /// Builder with default settings.
    pub fn new() -> Self {
        Self {
            config: TraceConfig::default(),
            clock: None,
            flag: None,
        }
    }

    /// Use `config`.
    pub fn config(mut self, config: TraceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the trace directory.
    pub fn trace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.trace_dir = dir.into();
        self
    }

    /// Set the retention bound.
    pub fn max_trace_days(mut self, days: usize) -> Self {
        self.config = self.config.with_max_trace_days(days);
        self
    }

    /// Skip the pause after file creation.
    pub fn no_settle_delay(mut self) -> Self {
        self.config.settle_delay_ms = 0;
        self
    }

    /// Use `clock` instead of the system clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Share an existing flag instead of creating one from the config.
    pub fn flag(mut self, flag: TraceFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Validate the configuration and build the recorder.
    ///
    /// Creates the trace directory if it does not exist yet.
    pub fn build(self) -> Result<TraceRecorder> {
        let config = self.config;
        config.validate()?;
        std::fs::create_dir_all(&config.trace_dir)?;

        let flag = self
            .flag
            .unwrap_or_else(|| TraceFlag::new(config.trace_enabled));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        debug!(
            dir = %config.trace_dir.display(),
            max_days = config.retention.max_nr_of_trace_days(),
            "opening trace recorder"
        );

        Ok(TraceRecorder {
            state: TraceFileManager::from_config(&config, TraceCategory::State),
            temperature: TraceFileManager::from_config(&config, TraceCategory::Temperature),
            appender: TraceAppender::new(flag),
            active: Mutex::new(BTreeMap::new()),
            clock,
            config,
        })
    }
}

impl Default for TraceRecorderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
