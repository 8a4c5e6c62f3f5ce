//! # slot-engine
//!
//! Deterministic interview slot computation over a single UTC timeline.
//!
//! The engine generates candidate meeting slots on a half-hour grid inside
//! business hours (09:00–17:00 UTC, weekdays only, 24-hour minimum notice),
//! then subtracts each participant's busy intervals until only times free
//! for everyone remain. Busy data comes from an injected
//! [`BusyIntervalSource`] collaborator — persistence, routing, and
//! authentication live outside this crate.
//!
//! ## Modules
//!
//! - [`rounding`] — half-hour round-up with end-of-day clamp
//! - [`candidates`] — candidate slot generation over the scheduling window
//! - [`source`] — busy-data collaborator trait and interval normalization
//! - [`subtract`] — two-pointer removal of busy time from candidate slots
//! - [`availability`] — orchestration: validate, generate, fetch, reduce
//! - [`interval`] — the shared UTC interval type
//! - [`error`] — error types

pub mod availability;
pub mod candidates;
pub mod error;
pub mod interval;
pub mod rounding;
pub mod source;
pub mod subtract;

pub use availability::compute_availability;
pub use candidates::generate_candidates;
pub use error::SlotError;
pub use interval::Interval;
pub use source::{normalize_busy, BusyIntervalSource, RawBusyInterval};
pub use subtract::subtract_busy;
