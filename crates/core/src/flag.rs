//! Shared tracing switch
//!
//! Producers never own this flag. The host hands clones to the appender and
//! keeps one to toggle tracing at runtime; every clone sees the same value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Externally updatable on/off switch for trace output.
#[derive(Debug, Clone)]
pub struct TraceFlag {
    enabled: Arc<AtomicBool>,
}

impl TraceFlag {
    /// Create a flag with the given initial state.
    pub fn new(enabled: bool) -> Self {
        TraceFlag {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// Check whether tracing is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Turn tracing on or off.
    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Turn tracing on.
    pub fn enable(&self) {
        self.set(true);
    }

    /// Turn tracing off.
    pub fn disable(&self) {
        self.set(false);
    }
}

impl Default for TraceFlag {
    fn default() -> Self {
        TraceFlag::new(true)
    }
}
