//! Candidate slot generation over the scheduling window.
//!
//! Walks a cursor across the business-hour grid of each eligible day and
//! emits every duration-sized slot that fits. Candidates are provisional:
//! they satisfy the business-hour, weekday, and lead-time rules but have not
//! yet been checked against anyone's busy data.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use log::debug;

use crate::interval::Interval;
use crate::rounding::round_up_to_half_hour;

/// Slots may not begin less than this far after the reference instant.
pub const LEAD_TIME_HOURS: i64 = 24;

/// Business hours in UTC: slots start at or after 09:00 and end at or
/// before 17:00.
pub const BUSINESS_OPEN_HOUR: u32 = 9;
pub const BUSINESS_CLOSE_HOUR: u32 = 17;

/// Candidate starts step on a 30-minute grid.
pub const GRID_MINUTES: i64 = 30;

/// Calendar days covered by one request, counted from the first day after
/// the lead time, weekends included in the count but never scheduled.
/// Together with the lead-time day this spans a 7-day calendar week view.
pub const WINDOW_DAYS: u32 = 6;

/// Generate every candidate slot of `duration_minutes` within the
/// scheduling window anchored at `reference_now`.
///
/// The first eligible instant is `reference_now + 24h` with its time-of-day
/// rounded up to the half-hour grid, and never earlier than 09:00 UTC of
/// that date. Each following day opens at 09:00. Saturdays and Sundays are
/// skipped entirely. A slot is emitted only when it ends at or before 17:00
/// UTC of its own day, so no slot ever spans midnight.
///
/// Output is ascending by start. An empty result is valid — a duration
/// longer than the 8-hour business day produces no slots at all.
pub fn generate_candidates(duration_minutes: u32, reference_now: DateTime<Utc>) -> Vec<Interval> {
    let window_start = reference_now + Duration::hours(LEAD_TIME_HOURS);
    let mut date = window_start.date_naive();

    // First day only: the grid-rounded lead-time instant may open the day
    // later than 09:00.
    let rounded = round_up_to_half_hour(window_start.time());
    let mut cursor = date.and_time(rounded).and_utc().max(at_hour(date, BUSINESS_OPEN_HOUR));

    let duration = Duration::minutes(i64::from(duration_minutes));
    let mut slots = Vec::new();

    for _ in 0..WINDOW_DAYS {
        if !is_weekend(date) {
            let close = at_hour(date, BUSINESS_CLOSE_HOUR);
            while cursor < close {
                let end = cursor + duration;
                if end <= close {
                    slots.push(Interval::new(cursor, end));
                }
                cursor += Duration::minutes(GRID_MINUTES);
            }
        }
        date += Duration::days(1);
        cursor = at_hour(date, BUSINESS_OPEN_HOUR);
    }

    debug!(
        "generated {} candidate slots of {} min from {}",
        slots.len(),
        duration_minutes,
        window_start
    );
    slots
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn at_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, 0, 0)
        .expect("hour is within 0..24")
        .and_utc()
}
