//! Trace file storage for tcu-trace
//!
//! This crate implements the on-disk lifecycle of daily trace files:
//! - scanner: enumerate a category's files in chronological order
//! - retention: decide which file to evict before a new one is created
//! - manager: create today's file for one category
//! - appender: best-effort, timestamped line appends gated by a TraceFlag

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appender;
pub mod manager;
pub mod retention;
pub mod scanner;

pub use appender::{format_line, TraceAppender};
pub use manager::{ManagerOptions, TraceFileManager};
pub use retention::{evict, remove_if_exists, RetentionPolicy};
pub use scanner::{base_name, list_trace_files, list_trace_files_with};
