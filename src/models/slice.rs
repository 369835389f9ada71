//! Execution slice model.
//!
//! A slice records that one process occupied the CPU during a contiguous
//! half-open interval `[start, end)`.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// A contiguous interval of CPU occupation by one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// 1-based process index.
    pub process: usize,
    /// Start time (inclusive).
    pub start: Ticks,
    /// End time (exclusive).
    pub end: Ticks,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process: usize, start: Ticks, end: Ticks) -> Self {
        Self {
            process,
            start,
            end,
        }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    /// Whether `next` continues this slice without a gap on the same process.
    #[inline]
    pub fn is_continued_by(&self, next: &ExecutionSlice) -> bool {
        self.process == next.process && self.end == next.start
    }
}

/// Coalesces adjacent slices of the same process.
///
/// Unit slices from the preemptive algorithms become maximal runs, which is
/// the shape a Gantt chart wants.
pub fn coalesce(slices: &[ExecutionSlice]) -> Vec<ExecutionSlice> {
    let mut merged: Vec<ExecutionSlice> = Vec::with_capacity(slices.len());
    for slice in slices {
        match merged.last_mut() {
            Some(last) if last.is_continued_by(slice) => last.end = slice.end,
            _ => merged.push(*slice),
        }
    }
    merged
}
