//! Trace categories
//!
//! The controller keeps two independent trace streams. Each stream owns its
//! own files in the trace directory, told apart by filename prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trace stream, identified on disk by its filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceCategory {
    /// Controller state transitions
    State,
    /// Temperature readings
    Temperature,
}

impl TraceCategory {
    /// Every category, in a stable order.
    pub const ALL: [TraceCategory; 2] = [TraceCategory::State, TraceCategory::Temperature];

    /// Filename prefix, without separator.
    pub fn prefix(&self) -> &'static str {
        match self {
            TraceCategory::State => "state",
            TraceCategory::Temperature => "temp",
        }
    }

    /// Prefix used when scanning the trace directory.
    ///
    /// Includes the `_` separator so that `state` never matches an
    /// unrelated file such as `statefoo`.
    pub fn scan_prefix(&self) -> &'static str {
        match self {
            TraceCategory::State => "state_",
            TraceCategory::Temperature => "temp_",
        }
    }

    /// Category owning the given prefix, if any.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.prefix() == prefix)
    }
}

impl fmt::Display for TraceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trace category: {0} (expected 'state' or 'temp')")]
pub struct UnknownCategory(pub String);

impl FromStr for TraceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "state" => Ok(TraceCategory::State),
            "temp" | "temperature" => Ok(TraceCategory::Temperature),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
