//! Two-pointer removal of busy time from candidate slots.
//!
//! Both inputs must already be ascending by start; the sweep never sorts.
//! A candidate overlapped by a busy block is dropped whole — the engine
//! does not split a slot around a short busy block. That is the documented
//! behavior of the scheduler, not an optimization shortcut.

use crate::interval::Interval;

/// Remove every candidate that overlaps any busy block.
///
/// Linear in `candidates.len() + busy.len()`. Touching edges
/// (`busy.start == candidate.end` or `busy.end == candidate.start`) are not
/// overlaps and never remove a candidate. Returns a fresh vector; the
/// inputs are untouched.
///
/// Called once per participant, threading each call's output into the next.
/// Because each call is a set difference on the candidate set, the final
/// result does not depend on participant order, and subtracting the same
/// busy list twice changes nothing.
pub fn subtract_busy(candidates: &[Interval], busy: &[Interval]) -> Vec<Interval> {
    let mut available = Vec::with_capacity(candidates.len());
    let mut j = 0;

    for &candidate in candidates {
        loop {
            match busy.get(j) {
                // No busy blocks left: everything from here on survives.
                None => {
                    available.push(candidate);
                    break;
                }
                // Candidate ends before this block starts: no overlap.
                Some(block) if candidate.end <= block.start => {
                    available.push(candidate);
                    break;
                }
                // Block ends before the candidate starts: block consumed.
                Some(block) if candidate.start >= block.end => {
                    j += 1;
                }
                // Any overlap discards the candidate whole.
                Some(_) => break,
            }
        }
    }

    available
}
