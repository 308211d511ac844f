//! Error types for trace operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the trace subsystem.
///
/// Only scanning surfaces as a hard failure to its caller. Creation
/// failures are returned as values the host may ignore, and append
/// failures are logged by the appender and never reach the producer.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace directory could not be traversed
    #[error("cannot scan trace directory {dir}: {source}")]
    Scan {
        /// Directory that was being scanned
        dir: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A trace file could not be created
    #[error("cannot create trace file {path}: {source}")]
    Create {
        /// Target file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be appended
    #[error("cannot append to trace file {path}: {source}")]
    Append {
        /// Target file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration values are out of range
    #[error("invalid trace configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("cannot parse trace configuration: {0}")]
    Config(String),

    /// Other I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for trace operations.
pub type Result<T> = std::result::Result<T, TraceError>;

impl TraceError {
    /// Check if this is a directory scan failure.
    pub fn is_scan(&self) -> bool {
        matches!(self, TraceError::Scan { .. })
    }

    /// Check if the underlying cause is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(std::io::ErrorKind::NotFound)
    }

    /// Kind of the underlying I/O error, if there is one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            TraceError::Scan { source, .. }
            | TraceError::Create { source, .. }
            | TraceError::Append { source, .. } => Some(source.kind()),
            TraceError::Io(e) => Some(e.kind()),
            TraceError::InvalidConfig(_) | TraceError::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for TraceError {
    fn from(e: serde_json::Error) -> Self {
        TraceError::Config(e.to_string())
    }
}
