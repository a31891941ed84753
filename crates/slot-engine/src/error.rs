//! Error types for slot-engine operations.

use thiserror::Error;

/// Errors that can occur while building schedule values.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A time range with negative bounds or `end < start`. Raised only at
    /// construction (directly or through deserialization); the query
    /// functions never fail for well-formed inputs.
    #[error("invalid time range [{start}, {end}): bounds must be non-negative with start <= end")]
    InvalidRange { start: i64, end: i64 },
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
