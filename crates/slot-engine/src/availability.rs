//! Orchestration: validate, generate, fetch, reduce.
//!
//! Composes the other modules into the one public entry point. Candidates
//! are generated once, busy data is fetched in a single batched call, and
//! each participant's normalized busy list then narrows the slot set in
//! turn (an AND-reduction — the order of participants does not affect the
//! result).

use chrono::{DateTime, Utc};
use log::debug;

use crate::candidates::generate_candidates;
use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::source::{normalize_busy, BusyIntervalSource};
use crate::subtract::subtract_busy;

/// Compute every slot in the scheduling window where all requested
/// participants are free.
///
/// `reference_now` defaults to the current instant; tests and replays pass
/// a fixed anchor. Validation happens before any fetch: a zero duration or
/// an empty participant list fails with [`SlotError::InvalidRequest`]. A
/// fetch or normalization failure aborts the whole request — no partial or
/// best-effort result is ever returned. An empty final list is a valid
/// outcome, not an error.
///
/// # Errors
/// Returns `SlotError::InvalidRequest` for rejected input,
/// `SlotError::UpstreamUnavailable` when the busy-data source fails, and
/// `SlotError::MalformedInterval` when a busy record cannot be validated.
pub fn compute_availability<S>(
    source: &S,
    participant_ids: &[String],
    duration_minutes: u32,
    reference_now: Option<DateTime<Utc>>,
) -> Result<Vec<Interval>>
where
    S: BusyIntervalSource + ?Sized,
{
    if duration_minutes == 0 {
        return Err(SlotError::InvalidRequest(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    if participant_ids.is_empty() {
        return Err(SlotError::InvalidRequest(
            "at least one participant is required".to_string(),
        ));
    }

    let now = reference_now.unwrap_or_else(Utc::now);
    let mut slots = generate_candidates(duration_minutes, now);

    let busy_by_participant = source.fetch_busy_intervals(participant_ids)?;

    for id in participant_ids {
        let raw = busy_by_participant
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let busy = normalize_busy(raw)?;
        slots = subtract_busy(&slots, &busy);
        debug!(
            "{} slots remain after subtracting {} busy intervals for participant {}",
            slots.len(),
            busy.len(),
            id
        );
    }

    Ok(slots)
}
