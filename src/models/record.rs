//! Per-process schedule record.

use serde::{Deserialize, Serialize};

use super::{Process, Ticks};

/// Timing outcome for one process.
///
/// `turnaround` and `waiting` are always derived from `end`, `arrival` and
/// `burst`, never accumulated slice by slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// 1-based process index.
    pub process: usize,
    /// Arrival time.
    pub arrival: Ticks,
    /// Burst (service) time.
    pub burst: Ticks,
    /// Time of the first CPU allocation.
    pub start: Ticks,
    /// Completion time.
    pub end: Ticks,
    /// `end - arrival`.
    pub turnaround: Ticks,
    /// `turnaround - burst`.
    pub waiting: Ticks,
}

impl ScheduleRecord {
    /// Derives a record from a process and its first-start / completion times.
    ///
    /// Subtractions saturate at zero; a well-formed run always has
    /// `end >= arrival + burst`.
    pub fn derive(process: &Process, start: Ticks, end: Ticks) -> Self {
        let turnaround = end.saturating_sub(process.arrival);
        Self {
            process: process.index,
            arrival: process.arrival,
            burst: process.burst,
            start,
            end,
            turnaround,
            waiting: turnaround.saturating_sub(process.burst),
        }
    }

    /// Response time: delay between arrival and first CPU allocation.
    #[inline]
    pub fn response(&self) -> Ticks {
        self.start.saturating_sub(self.arrival)
    }
}
