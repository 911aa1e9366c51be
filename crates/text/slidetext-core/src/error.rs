//! Error types for text transitions

use serde::{Deserialize, Serialize};

use crate::ids::SignalId;

/// Error type for building and running text transitions
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TransitionError {
    /// Duration was negative, NaN or infinite
    #[error("Invalid duration: {value}")]
    InvalidDuration { value: f64 },

    /// Typing rate was not a positive finite number
    #[error("Invalid words-per-minute rate: {value}")]
    InvalidRate { value: f64 },

    /// Configuration field out of range
    #[error("Invalid config field `{field}`: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Signal id does not refer to a live signal
    #[error("Signal not found: {id:?}")]
    SignalNotFound { id: SignalId },

    /// Signal name not registered in the store
    #[error("Unknown signal: {name}")]
    UnknownSignal { name: String },

    /// Signal name registered twice
    #[error("Duplicate signal: {name}")]
    DuplicateSignal { name: String },

    /// Every signal id has been handed out
    #[error("Signal ids exhausted")]
    SignalIdsExhausted,

    /// Slide script could not be parsed
    #[error("Parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for TransitionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

/// Result type for text transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;

/// Reject negative or non-finite durations.
#[inline]
pub(crate) fn check_duration(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TransitionError::InvalidDuration { value })
    }
}

/// Reject zero, negative or non-finite rates.
#[inline]
pub(crate) fn check_rate(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TransitionError::InvalidRate { value })
    }
}
