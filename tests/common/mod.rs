//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;
use std::sync::Arc;
use tcu_trace::{ManualClock, TraceConfig, TraceRecorder};
use tempfile::TempDir;

/// Midnight plus a few seconds on the given day.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 5)
        .unwrap()
}

/// `start` moved forward by `days`.
pub fn plus_days(start: NaiveDateTime, days: i64) -> NaiveDateTime {
    start + chrono::Duration::days(days)
}

/// A recorder over a fresh temp directory with no settle delay.
pub struct Fixture {
    pub dir: TempDir,
    pub clock: Arc<ManualClock>,
    pub recorder: TraceRecorder,
}

impl Fixture {
    pub fn new(max_days: usize, start: NaiveDateTime) -> Self {
        let dir = TempDir::new().unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let recorder = TraceRecorder::builder()
            .config(TraceConfig::immediate(dir.path()).with_max_trace_days(max_days))
            .clock(clock.clone())
            .build()
            .unwrap();
        Fixture {
            dir,
            clock,
            recorder,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap()
    }
}

/// Sorted names of all entries in `dir`.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
