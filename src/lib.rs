//! # tcu-trace
//!
//! Dated trace files for the terrarium control unit.
//!
//! The controller records two independent streams: state transitions and
//! temperature readings. Each stream gets one plain-text file per day,
//! `state_YYYYMMDD` and `temp_YYYYMMDD`, and only the newest
//! `max_nr_of_trace_days` files of each stream are kept.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tcu_trace::prelude::*;
//!
//! let recorder = TraceRecorder::open(TraceConfig::new("/var/lib/tcu/trace"))?;
//!
//! // Once at startup and then from the daily timer
//! recorder.rotate_if_due();
//!
//! // From the sensor loop
//! trace_temperature!(recorder, "terrarium {} {:.1}", 1, 24.25);
//!
//! // Tracing can be switched off without touching the producers
//! recorder.flag().disable();
//! ```
//!
//! ## Layers
//!
//! - [`tcu_trace_core`] - names, categories, configuration, flag, clock
//! - [`tcu_trace_storage`] - scanning, retention, creation, appends
//! - [`TraceRecorder`] - keeps today's file per category and routes lines

#![warn(missing_docs)]

mod error;
mod recorder;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use recorder::{RotationReport, TraceRecorder, TraceRecorderBuilder};

// Re-export the layers
pub use tcu_trace_core::{
    Clock, ManualClock, RetentionConfig, ScanMode, SystemClock, TraceCategory, TraceConfig,
    TraceError, TraceFileName, TraceFlag,
};
pub use tcu_trace_storage::{
    format_line, list_trace_files, list_trace_files_with, ManagerOptions, RetentionPolicy,
    TraceAppender, TraceFileManager,
};

/// Append a state trace line through a [`TraceRecorder`].
#[macro_export]
macro_rules! trace_state {
    ($recorder:expr, $($arg:tt)+) => {
        $recorder.trace($crate::TraceCategory::State, format_args!($($arg)+))
    };
}

/// Append a temperature trace line through a [`TraceRecorder`].
#[macro_export]
macro_rules! trace_temperature {
    ($recorder:expr, $($arg:tt)+) => {
        $recorder.trace($crate::TraceCategory::Temperature, format_args!($($arg)+))
    };
}
