//! Unified error type for tcu-trace.
//!
//! Wraps the storage-level [`TraceError`] into a small, stable set of
//! variants for hosts and tools.

use tcu_trace_core::{TraceCategory, TraceError};
use thiserror::Error;

/// All tcu-trace errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Trace directory could not be listed
    #[error("scan failed: {0}")]
    Scan(String),

    /// Today's trace file could not be created
    #[error("create failed: {0}")]
    Create(String),

    /// A line could not be written
    #[error("append failed: {0}")]
    Append(String),

    /// No trace file is open for the category
    #[error("no active trace file for category '{0}'")]
    NoActiveFile(TraceCategory),

    /// Configuration missing, unreadable, or out of range
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tcu-trace operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if the host may simply try again later.
    ///
    /// Creation and append failures are usually transient (disk full,
    /// file removed by an operator); configuration errors are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Create(_) | Error::Append(_) | Error::NoActiveFile(_) | Error::Io(_)
        )
    }
}

// Convert from storage errors
impl From<TraceError> for Error {
    fn from(e: TraceError) -> Self {
        match e {
            TraceError::Scan { .. } => Error::Scan(e.to_string()),
            TraceError::Create { .. } => Error::Create(e.to_string()),
            TraceError::Append { .. } => Error::Append(e.to_string()),
            TraceError::InvalidConfig(msg) | TraceError::Config(msg) => Error::Config(msg),
            TraceError::Io(io_err) => Error::Io(io_err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_from_trace_error() {
        let err: Error = TraceError::Create {
            path: PathBuf::from("/trace/state_20210812"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(matches!(err, Error::Create(_)));
        assert!(err.is_retryable());
        assert!(err.to_string().contains("state_20210812"));

        let err: Error = TraceError::InvalidConfig("bad".into()).into();
        assert!(err.is_config());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_no_active_file_display() {
        let err = Error::NoActiveFile(TraceCategory::Temperature);
        assert_eq!(err.to_string(), "no active trace file for category 'temp'");
    }
}
