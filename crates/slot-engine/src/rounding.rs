//! Half-hour round-up with end-of-day clamp.
//!
//! Candidate slots start on :00 or :30 marks, so the first usable instant of
//! the scheduling window is its time-of-day rounded up to the grid.

use chrono::{NaiveTime, Timelike};

/// Round a time-of-day up to the next half-hour boundary.
///
/// Exact `:00`/`:30` instants (zero seconds and nanoseconds) are unchanged;
/// any non-zero sub-minute remainder forces rounding up. A result past the
/// end of the day clamps to `23:30` of the same day — it does NOT roll over
/// into the next day, which decides which slots exist on the boundary day.
///
/// The second and nanosecond of the result are always zero.
pub fn round_up_to_half_hour(t: NaiveTime) -> NaiveTime {
    let mut hour = t.hour();
    let mut minute = t.minute();
    if t.second() > 0 || t.nanosecond() > 0 {
        minute += 1;
    }

    if minute > 0 && minute <= 30 {
        minute = 30;
    } else if minute > 30 {
        minute = 0;
        hour += 1;
    }

    if hour > 23 {
        hour = 23;
        minute = 30;
    }

    NaiveTime::from_hms_opt(hour, minute, 0).expect("hour and minute are in range after clamping")
}
