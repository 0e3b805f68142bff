//! Core error types for jetshift-core.
//!
//! This module defines the error hierarchy using thiserror. Plan
//! generation itself is infallible by design (degenerate inputs degrade
//! to empty phases), so errors only arise from timezone resolution and
//! trip parameter validation.

use thiserror::Error;

/// Core error type for jetshift-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timezone identifier not present in the IANA database
    #[error("Unknown timezone: '{0}'")]
    UnknownTimezone(String),

    /// Trip parameter validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Trip parameter validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Home and destination are the same zone
    #[error("Destination must be different from home timezone")]
    SameTimezone,

    /// A time string is not valid 24-hour HH:MM
    #[error("Invalid time for '{field}': '{value}' (expected HH:MM)")]
    InvalidTime {
        field: &'static str,
        value: String,
    },

    /// Departure date earlier than the current date
    #[error("Departure date cannot be in the past")]
    DepartureInPast,

    /// Trip length outside the supported range
    #[error("Days at destination must be between 1 and 365 (got {0})")]
    TripLengthOutOfRange(u32),

    /// Bedtime and wake time imply an implausible sleep duration
    #[error("Sleep duration of {0:.1} hours is outside the supported 4-14 hour range")]
    UnusualSleepDuration(f64),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
