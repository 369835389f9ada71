//! Schedule (result) model.
//!
//! A schedule holds the per-process records and the raw execution slices
//! produced by one run of one algorithm.

use serde::{Deserialize, Serialize};

use super::{coalesce, Algorithm, ExecutionSlice, ScheduleRecord, Ticks};

/// The outcome of one scheduling run.
///
/// `records` are ordered as the algorithm finalized them (index order for
/// FCFS and SJF, completion order otherwise). `slices` are in execution
/// order and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Algorithm that produced this schedule.
    pub algorithm: Algorithm,
    /// One record per process.
    pub records: Vec<ScheduleRecord>,
    /// CPU occupation intervals in execution order.
    pub slices: Vec<ExecutionSlice>,
}

/// An interval during which the CPU had nothing to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// Start time (inclusive).
    pub start: Ticks,
    /// End time (exclusive).
    pub end: Ticks,
}

impl IdleGap {
    /// Gap length in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            records: Vec::new(),
            slices: Vec::new(),
        }
    }

    /// Makespan: latest completion time.
    pub fn makespan(&self) -> Ticks {
        self.records.iter().map(|r| r.end).max().unwrap_or(0)
    }

    /// Finds the record for a 1-based process index.
    pub fn record_for(&self, process: usize) -> Option<&ScheduleRecord> {
        self.records.iter().find(|r| r.process == process)
    }

    /// Returns all slices of a process, in execution order.
    pub fn slices_for(&self, process: usize) -> Vec<&ExecutionSlice> {
        self.slices.iter().filter(|s| s.process == process).collect()
    }

    /// Records sorted by process index.
    pub fn records_by_index(&self) -> Vec<ScheduleRecord> {
        let mut records = self.records.clone();
        records.sort_by_key(|r| r.process);
        records
    }

    /// Execution order with adjacent slices of one process merged.
    pub fn timeline(&self) -> Vec<ExecutionSlice> {
        coalesce(&self.slices)
    }

    /// Idle intervals between t=0 and the makespan.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        let mut gaps = Vec::new();
        let mut cursor: Ticks = 0;
        for slice in &self.slices {
            if slice.start > cursor {
                gaps.push(IdleGap {
                    start: cursor,
                    end: slice.start,
                });
            }
            cursor = cursor.max(slice.end);
        }
        gaps
    }

    /// Total idle time before the makespan.
    pub fn idle_time(&self) -> Ticks {
        self.idle_gaps().iter().map(IdleGap::duration).sum()
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> Ticks {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// Mean turnaround time. `None` for an empty schedule.
    pub fn average_turnaround(&self) -> Option<f64> {
        self.mean_of(|r| r.turnaround)
    }

    /// Mean waiting time. `None` for an empty schedule.
    pub fn average_waiting(&self) -> Option<f64> {
        self.mean_of(|r| r.waiting)
    }

    /// Number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    fn mean_of(&self, f: impl Fn(&ScheduleRecord) -> Ticks) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: Ticks = self.records.iter().map(f).sum();
        Some(sum as f64 / self.records.len() as f64)
    }
}
