//! Tests for busy-record normalization at the collaborator boundary.

use chrono::{TimeZone, Utc};
use slot_engine::{normalize_busy, RawBusyInterval, SlotError};

fn raw(start: &str, end: &str) -> RawBusyInterval {
    RawBusyInterval {
        start: start.to_string(),
        end: end.to_string(),
    }
}

#[test]
fn normalized_output_is_sorted_by_start_then_end() {
    let records = vec![
        raw("2025-01-02T14:00:00Z", "2025-01-02T15:00:00Z"),
        raw("2025-01-02T09:00:00Z", "2025-01-02T11:00:00Z"),
        raw("2025-01-02T09:00:00Z", "2025-01-02T10:00:00Z"),
    ];

    let intervals = normalize_busy(&records).unwrap();

    for pair in intervals.windows(2) {
        assert!(pair[0].start <= pair[1].start);
        if pair[0].start == pair[1].start {
            assert!(pair[0].end <= pair[1].end);
        }
    }
    assert_eq!(
        intervals[0].end,
        Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap()
    );
}

#[test]
fn offset_timestamps_are_converted_to_utc() {
    let records = vec![raw("2025-01-02T10:00:00+01:00", "2025-01-02T11:00:00+01:00")];
    let intervals = normalize_busy(&records).unwrap();
    assert_eq!(
        intervals[0].start,
        Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap()
    );
}

#[test]
fn naive_timestamp_is_rejected() {
    let records = vec![raw("2025-01-02T10:00:00", "2025-01-02T11:00:00Z")];
    assert!(matches!(
        normalize_busy(&records),
        Err(SlotError::MalformedInterval(_))
    ));
}

#[test]
fn garbage_timestamp_is_rejected() {
    let records = vec![raw("not a timestamp", "2025-01-02T11:00:00Z")];
    assert!(matches!(
        normalize_busy(&records),
        Err(SlotError::MalformedInterval(_))
    ));
}

#[test]
fn inverted_interval_is_rejected() {
    let records = vec![raw("2025-01-02T12:00:00Z", "2025-01-02T11:00:00Z")];
    assert!(matches!(
        normalize_busy(&records),
        Err(SlotError::MalformedInterval(_))
    ));
}

#[test]
fn zero_length_interval_is_rejected() {
    let records = vec![raw("2025-01-02T11:00:00Z", "2025-01-02T11:00:00Z")];
    assert!(matches!(
        normalize_busy(&records),
        Err(SlotError::MalformedInterval(_))
    ));
}

#[test]
fn empty_input_normalizes_to_empty() {
    assert_eq!(normalize_busy(&[]).unwrap(), vec![]);
}
