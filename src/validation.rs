//! Input validation for scheduling runs.
//!
//! Turns raw arrival/burst sequences (or whitespace-separated text tokens)
//! into a well-formed process set before any simulation starts. Detects:
//! - Arrival/burst length mismatch
//! - Empty process sets
//! - Zero burst times
//! - Time horizons that overflow [`Ticks`]
//! - Non-numeric or negative tokens
//! - Missing or zero Round Robin quantum

use std::num::NonZeroU64;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Algorithm, Process, Ticks};

/// Validates arrival and burst sequences and builds the process set.
///
/// Checks:
/// 1. Both sequences have the same length
/// 2. At least one process is present
/// 3. Every burst time is strictly positive
/// 4. The latest arrival plus the total burst fits in [`Ticks`], which
///    bounds every completion time of every algorithm
///
/// # Returns
/// Processes indexed `1..=n` in input order.
pub fn validate_input(arrivals: &[Ticks], bursts: &[Ticks]) -> ScheduleResult<Vec<Process>> {
    if arrivals.len() != bursts.len() {
        return Err(ScheduleError::InputShape {
            arrivals: arrivals.len(),
            bursts: bursts.len(),
        });
    }

    if arrivals.is_empty() {
        return Err(ScheduleError::invalid("process set is empty"));
    }

    if let Some(pos) = bursts.iter().position(|&b| b == 0) {
        return Err(ScheduleError::invalid(format!(
            "burst time of P{} must be positive",
            pos + 1
        )));
    }

    let horizon = bursts
        .iter()
        .try_fold(arrivals.iter().copied().max().unwrap_or(0), |acc, &b| {
            acc.checked_add(b)
        });
    if horizon.is_none() {
        return Err(ScheduleError::invalid(
            "latest arrival plus total burst time exceeds the time range",
        ));
    }

    Ok(Process::from_pairs(arrivals, bursts))
}

/// Checks the time quantum against the selected algorithm.
///
/// Returns `Some(quantum)` for Round Robin and `None` for every other
/// algorithm (a supplied quantum is ignored there).
pub fn validate_quantum(
    algorithm: Algorithm,
    quantum: Option<Ticks>,
) -> ScheduleResult<Option<NonZeroU64>> {
    if !algorithm.requires_quantum() {
        return Ok(None);
    }

    match quantum {
        None => Err(ScheduleError::invalid(format!(
            "{algorithm} requires a time quantum"
        ))),
        Some(q) => NonZeroU64::new(q)
            .map(Some)
            .ok_or_else(|| ScheduleError::invalid("time quantum must be positive")),
    }
}

/// Parses a whitespace-separated list of non-negative integers.
///
/// `field` names the input in error messages (e.g., "arrival times").
/// Any token that is not a non-negative integer rejects the whole list.
pub fn parse_times(field: &str, input: &str) -> ScheduleResult<Vec<Ticks>> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse::<Ticks>().map_err(|_| {
                ScheduleError::invalid(format!(
                    "{field}: '{token}' is not a non-negative integer"
                ))
            })
        })
        .collect()
}

/// Parses an optional quantum token. Blank input counts as absent.
pub fn parse_quantum(input: Option<&str>) -> ScheduleResult<Option<Ticks>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(token) => token.parse::<Ticks>().map(Some).map_err(|_| {
            ScheduleError::invalid(format!("time quantum: '{token}' is not a valid integer"))
        }),
    }
}
