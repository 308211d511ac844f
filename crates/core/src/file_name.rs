//! Dated trace file names
//!
//! A trace file is named `<prefix>_<YYYYMMDD>`. The date suffix is fixed
//! width and zero padded, so sorting names lexicographically sorts them
//! chronologically within a category.

use crate::category::TraceCategory;
use chrono::NaiveDate;
use std::fmt;

/// Date format of the filename suffix.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Timestamp format at the start of every trace line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_DIGITS: usize = 8;

/// Name of one day's trace file for one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceFileName {
    name: String,
    category: TraceCategory,
    date: NaiveDate,
}

impl TraceFileName {
    /// Name of the file for `category` on `date`.
    pub fn for_day(category: TraceCategory, date: NaiveDate) -> Self {
        TraceFileName {
            name: format!("{}_{}", category.prefix(), date.format(DATE_FORMAT)),
            category,
            date,
        }
    }

    /// Parse a bare file name.
    ///
    /// Returns `None` unless the name is exactly a known prefix, `_`, and
    /// eight digits forming a valid calendar date.
    pub fn parse(name: &str) -> Option<Self> {
        let (prefix, digits) = name.split_once('_')?;
        let category = TraceCategory::from_prefix(prefix)?;
        if digits.len() != DATE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let date = NaiveDate::parse_from_str(digits, DATE_FORMAT).ok()?;
        Some(TraceFileName {
            name: name.to_string(),
            category,
            date,
        })
    }

    /// Category this file belongs to.
    pub fn category(&self) -> TraceCategory {
        self.category
    }

    /// Day this file covers.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The file name as stored on disk.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consume into the owned name.
    pub fn into_string(self) -> String {
        self.name
    }
}

impl fmt::Display for TraceFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for TraceFileName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl AsRef<std::path::Path> for TraceFileName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.name)
    }
}
