//! Convenient imports for tcu-trace.
//!
//! ```ignore
//! use tcu_trace::prelude::*;
//!
//! let recorder = TraceRecorder::open(TraceConfig::new("/var/lib/tcu/trace"))?;
//! recorder.rotate();
//! trace_state!(recorder, "mode {} -> {}", "day", "night");
//! ```

// Main entry point
pub use crate::recorder::{RotationReport, TraceRecorder, TraceRecorderBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use tcu_trace_core::{
    Clock, ManualClock, RetentionConfig, ScanMode, SystemClock, TraceCategory, TraceConfig,
    TraceFileName, TraceFlag,
};

// Macros
pub use crate::{trace_state, trace_temperature};
