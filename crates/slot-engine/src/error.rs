//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// Client input rejected before any busy data is fetched.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The busy-data collaborator failed; the whole request aborts rather
    /// than treating the participant as fully available.
    #[error("Busy-data source unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A busy record from the collaborator could not be turned into a
    /// valid interval.
    #[error("Malformed busy interval: {0}")]
    MalformedInterval(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
