//! Trace configuration
//!
//! Settings are fixed at startup. The only runtime knob is the tracing
//! switch, which lives in [`crate::TraceFlag`] rather than here.
//!
//! A configuration file is plain JSON; every field is optional and unknown
//! keys are rejected:
//!
//! ```json
//! {
//!     "trace_dir": "/var/lib/tcu/tracefiles",
//!     "retention": { "max_nr_of_trace_days": 14 },
//!     "trace_enabled": true,
//!     "settle_delay_ms": 1000,
//!     "scan_mode": "flat"
//! }
//! ```

use crate::error::{Result, TraceError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default number of daily files kept per category.
pub const DEFAULT_MAX_TRACE_DAYS: usize = 30;

/// Default pause after creating a trace file.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// How many daily files a category may keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetentionConfig {
    #[serde(alias = "maxNrOfTraceDays")]
    max_nr_of_trace_days: usize,
}

impl RetentionConfig {
    /// Retain at most `max_nr_of_trace_days` files per category.
    pub fn new(max_nr_of_trace_days: usize) -> Self {
        RetentionConfig {
            max_nr_of_trace_days,
        }
    }

    /// Maximum number of files per category.
    pub fn max_nr_of_trace_days(&self) -> usize {
        self.max_nr_of_trace_days
    }
}

impl Default for RetentionConfig {
    fn default() -> Self {
        RetentionConfig::new(DEFAULT_MAX_TRACE_DAYS)
    }
}

/// How the trace directory is enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Only direct children of the trace directory
    #[default]
    Flat,
    /// Every file below the trace directory
    Recursive,
}

/// Complete trace subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Directory holding all trace files
    pub trace_dir: PathBuf,
    /// Per-category retention bound
    pub retention: RetentionConfig,
    /// Initial state of the tracing switch
    pub trace_enabled: bool,
    /// Pause after creating a file, in milliseconds (0 disables)
    pub settle_delay_ms: u64,
    /// Directory enumeration strategy
    pub scan_mode: ScanMode,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            trace_dir: PathBuf::from("tracefiles"),
            retention: RetentionConfig::default(),
            trace_enabled: true,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            scan_mode: ScanMode::Flat,
        }
    }
}

impl TraceConfig {
    /// Default configuration rooted at `trace_dir`.
    pub fn new(trace_dir: impl Into<PathBuf>) -> Self {
        TraceConfig {
            trace_dir: trace_dir.into(),
            ..Default::default()
        }
    }

    /// Configuration for tests and tools: no settle delay.
    ///
    /// File ordering comes from the fixed-width date in the name, so the
    /// pause is not needed for correctness.
    pub fn immediate(trace_dir: impl Into<PathBuf>) -> Self {
        TraceConfig {
            settle_delay_ms: 0,
            ..TraceConfig::new(trace_dir)
        }
    }

    /// Replace the retention bound.
    pub fn with_max_trace_days(mut self, days: usize) -> Self {
        self.retention = RetentionConfig::new(days);
        self
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: TraceConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a usable setup.
    pub fn validate(&self) -> Result<()> {
        if self.trace_dir.as_os_str().is_empty() {
            return Err(TraceError::InvalidConfig("trace_dir must not be empty".into()));
        }
        if self.retention.max_nr_of_trace_days() == 0 {
            return Err(TraceError::InvalidConfig(
                "max_nr_of_trace_days must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Settle delay as a duration.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
