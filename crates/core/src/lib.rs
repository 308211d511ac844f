//! Core types for tcu-trace
//!
//! This crate defines the shared vocabulary of the trace subsystem:
//! - TraceCategory: state vs temperature trace streams
//! - TraceFileName: `<prefix>_<YYYYMMDD>` names with parsing and ordering
//! - RetentionConfig / TraceConfig: startup configuration
//! - TraceFlag: shared, externally toggled tracing switch
//! - Clock: source of local wall time
//! - TraceError: error type for all trace operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod clock;
pub mod config;
pub mod error;
pub mod file_name;
pub mod flag;

pub use category::TraceCategory;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{RetentionConfig, ScanMode, TraceConfig};
pub use error::{Result, TraceError};
pub use file_name::{TraceFileName, DATE_FORMAT, TIMESTAMP_FORMAT};
pub use flag::TraceFlag;
