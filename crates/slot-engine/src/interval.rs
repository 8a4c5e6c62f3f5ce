//! The shared UTC interval type.
//!
//! One struct serves both roles in the pipeline: a candidate slot (every
//! element of a generated set has the same `end - start` duration) and a
//! busy block (a participant's committed time). Intervals are half-open in
//! effect — two intervals where one ends exactly when the other starts do
//! not overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `[start, end)` span on the UTC timeline. Invariant: `start < end`,
/// enforced where external data enters the crate.
///
/// Serializes both endpoints as ISO-8601 UTC timestamps with a trailing `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Interval { start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching edges (`a.end == b.start`) are not an overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}
