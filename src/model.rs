use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Oldest day-offset still inside the window; the table holds `WINDOW_DAYS + 1` slots.
pub const WINDOW_DAYS: usize = 183;

/// Highest week-index that can hold a sealed column.
pub const WINDOW_WEEKS: usize = WINDOW_DAYS / 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub author_email: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl CommitRecord {
    pub fn new(author_email: impl Into<String>, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            author_email: author_email.into(),
            timestamp,
        }
    }
}

/// Where a timestamp lands relative to the start of today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    Within(usize),
    OutOfRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub author: String,
    pub window_days: usize,
    pub alignment: usize,
    pub repositories: Vec<String>,
    pub counts: Vec<u32>,
}
