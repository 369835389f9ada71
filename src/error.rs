//! Error types for scheduling runs.
//!
//! Every error is detected before the simulation starts. A run either
//! returns a complete [`Schedule`](crate::models::Schedule) or one of these
//! errors, never a partial result.

use thiserror::Error;

/// Errors surfaced to the caller of a scheduling run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Arrival and burst sequences do not describe the same process set.
    #[error("input shape mismatch: {arrivals} arrival times but {bursts} burst times")]
    InputShape {
        /// Number of arrival times supplied.
        arrivals: usize,
        /// Number of burst times supplied.
        bursts: usize,
    },
    /// A parameter or input value is missing or invalid.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ScheduleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

/// Result alias for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ScheduleError::InputShape {
            arrivals: 3,
            bursts: 2,
        };
        assert_eq!(
            e.to_string(),
            "input shape mismatch: 3 arrival times but 2 burst times"
        );

        let e = ScheduleError::invalid("time quantum must be positive");
        assert_eq!(e.to_string(), "invalid parameter: time quantum must be positive");
    }
}
