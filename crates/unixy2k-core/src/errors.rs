//! Error type for clock and countdown operations.
//!
//! Arithmetic in the calculator is total; the only runtime failure is reading
//! the wall clock.

use serde::{Deserialize, Serialize};

/// Errors raised while obtaining the instant to count down from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum TimeError {
    /// The system clock could not be read
    #[error("Clock unavailable: {reason}")]
    ClockUnavailable {
        /// What went wrong while sampling the clock
        reason: String,
    },

    /// A synthetic epoch value cannot be represented as a UTC instant
    #[error("Epoch {epoch} is outside the representable range")]
    OutOfRange {
        /// The rejected epoch value
        epoch: i64,
    },
}

impl TimeError {
    /// Create a clock-unavailable error
    pub fn clock_unavailable(reason: impl Into<String>) -> Self {
        Self::ClockUnavailable {
            reason: reason.into(),
        }
    }
}

/// Result alias for time operations
pub type TimeResult<T> = Result<T, TimeError>;
