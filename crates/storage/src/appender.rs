//! Timestamped line appends
//!
//! Every line is `<yyyy-MM-dd HH:mm:ss> <message>\n`, written with a single
//! `write_all` to a file opened in append mode. The file must already exist;
//! the appender never creates or truncates trace files.
//!
//! Tracing is a side channel. [`TraceAppender::append`] logs failures and
//! returns nothing, so a full disk or a file deleted underneath the writer
//! cannot disturb the producer.

use chrono::NaiveDateTime;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tcu_trace_core::{Result, TraceError, TraceFlag, TIMESTAMP_FORMAT};
use tracing::warn;

/// Render one trace line, including the trailing newline.
pub fn format_line(now: NaiveDateTime, args: fmt::Arguments<'_>) -> String {
    format!("{} {}\n", now.format(TIMESTAMP_FORMAT), args)
}

/// Appends lines to trace files while the shared flag is on.
#[derive(Debug, Clone)]
pub struct TraceAppender {
    flag: TraceFlag,
}

impl TraceAppender {
    /// Appender gated by `flag`.
    pub fn new(flag: TraceFlag) -> Self {
        TraceAppender { flag }
    }

    /// The flag this appender reads before every write.
    pub fn flag(&self) -> &TraceFlag {
        &self.flag
    }

    /// Append one line, logging instead of returning any failure.
    ///
    /// Does nothing at all, not even opening the file, while the flag is off.
    pub fn append(&self, path: &Path, now: NaiveDateTime, args: fmt::Arguments<'_>) {
        if let Err(e) = self.try_append(path, now, args) {
            warn!(error = %e, "trace line dropped");
        }
    }

    /// Append one line and report the outcome.
    ///
    /// Returns `Ok(false)` when tracing is off and `Ok(true)` once the line
    /// has been handed to the OS.
    pub fn try_append(
        &self,
        path: &Path,
        now: NaiveDateTime,
        args: fmt::Arguments<'_>,
    ) -> Result<bool> {
        if !self.flag.is_enabled() {
            return Ok(false);
        }

        let line = format_line(now, args);
        let append_err = |source| TraceError::Append {
            path: path.to_path_buf(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(append_err)?;
        file.write_all(line.as_bytes()).map_err(append_err)?;
        Ok(true)
    }
}

/// Append a formatted line through a [`TraceAppender`].
///
/// ```ignore
/// trace_line!(appender, &path, now, "heater {} -> {}", old, new);
/// ```
#[macro_export]
macro_rules! trace_line {
    ($appender:expr, $path:expr, $now:expr, $($arg:tt)+) => {
        $appender.append($path, $now, format_args!($($arg)+))
    };
}
