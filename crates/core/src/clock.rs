//! Local wall-clock source
//!
//! File names and line stamps use local time, as an operator reading the
//! trace directory expects. `ManualClock` lets tests and simulations walk
//! through days without waiting for them.

use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;

/// Source of the current local timestamp.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    /// Create a clock stopped at `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        ManualClock {
            now: Mutex::new(start),
        }
    }

    /// Jump to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    /// Move forward by `by`.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
