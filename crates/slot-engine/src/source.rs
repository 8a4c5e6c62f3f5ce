//! Busy-data collaborator trait and interval normalization.
//!
//! The engine never talks to a calendar provider directly; callers inject a
//! [`BusyIntervalSource`]. Raw records arrive as ISO-8601 timestamp strings
//! and are validated into typed [`Interval`]s at this boundary — nothing
//! past it sees a naive timestamp or an inverted interval.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::Interval;

/// A busy interval exactly as the collaborator delivers it: two ISO-8601
/// timestamp strings, offset required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBusyInterval {
    pub start: String,
    pub end: String,
}

/// Source of per-participant busy intervals.
///
/// One batched call serves a whole availability request. Implementations
/// may fan out per participant concurrently, but must return only complete
/// results: if any participant's data cannot be fetched, the call fails
/// with [`SlotError::UpstreamUnavailable`] — a fetch failure is never
/// reported as "fully available". A participant absent from the returned
/// map simply has no busy data.
///
/// Intervals need not arrive sorted; [`normalize_busy`] sorts them before
/// subtraction.
pub trait BusyIntervalSource {
    fn fetch_busy_intervals(
        &self,
        participant_ids: &[String],
    ) -> Result<HashMap<String, Vec<RawBusyInterval>>>;
}

/// Parse, validate, and sort one participant's raw busy records.
///
/// Each endpoint must be an RFC 3339 timestamp carrying an offset; it is
/// converted to UTC. Records with an unparsable endpoint or with
/// `start >= end` fail with [`SlotError::MalformedInterval`]. The result is
/// ascending by `(start, end)`, as the subtraction sweep requires.
pub fn normalize_busy(raw: &[RawBusyInterval]) -> Result<Vec<Interval>> {
    let mut intervals = raw
        .iter()
        .map(parse_interval)
        .collect::<Result<Vec<Interval>>>()?;
    intervals.sort_by_key(|iv| (iv.start, iv.end));
    Ok(intervals)
}

fn parse_interval(raw: &RawBusyInterval) -> Result<Interval> {
    let start = parse_utc(&raw.start)?;
    let end = parse_utc(&raw.end)?;
    if start >= end {
        return Err(SlotError::MalformedInterval(format!(
            "empty or inverted interval {} .. {}",
            raw.start, raw.end
        )));
    }
    Ok(Interval::new(start, end))
}

fn parse_utc(timestamp: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SlotError::MalformedInterval(format!("bad timestamp {:?}: {}", timestamp, e)))
}
