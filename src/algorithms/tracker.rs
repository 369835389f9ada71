//! Per-run execution bookkeeping.
//!
//! Every algorithm routes CPU time through a [`RunTracker`]. The tracker
//! owns the remaining-burst table, first-start and completion tables, and
//! the slice list for exactly one run; [`RunTracker::finish`] turns them
//! into a [`Schedule`] with turnaround and waiting derived from scratch.

use tracing::trace;

use crate::models::{Algorithm, ExecutionSlice, Process, Schedule, ScheduleRecord, Ticks};

/// Order in which records are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordOrder {
    /// Process index order.
    Index,
    /// Order in which processes completed.
    Completion,
}

/// Mutable state of one scheduling run.
#[derive(Debug)]
pub(crate) struct RunTracker<'a> {
    processes: &'a [Process],
    remaining: Vec<Ticks>,
    first_start: Vec<Option<Ticks>>,
    completion: Vec<Option<Ticks>>,
    finish_order: Vec<usize>,
    slices: Vec<ExecutionSlice>,
}

impl<'a> RunTracker<'a> {
    /// Creates a tracker with every process holding its full burst.
    ///
    /// Requires `processes[i].index == i + 1`.
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        debug_assert!(processes.iter().enumerate().all(|(i, p)| p.index == i + 1));
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst).collect(),
            first_start: vec![None; processes.len()],
            completion: vec![None; processes.len()],
            finish_order: Vec::with_capacity(processes.len()),
            slices: Vec::new(),
        }
    }

    /// Remaining-burst table, indexed by position.
    #[inline]
    pub(crate) fn remaining(&self) -> &[Ticks] {
        &self.remaining
    }

    /// Remaining burst of the process at `pos`.
    #[inline]
    pub(crate) fn remaining_of(&self, pos: usize) -> Ticks {
        self.remaining[pos]
    }

    /// Whether every process has finished.
    pub(crate) fn is_done(&self) -> bool {
        self.remaining.iter().all(|&r| r == 0)
    }

    /// Earliest arrival among processes with work left.
    pub(crate) fn next_arrival(&self) -> Option<Ticks> {
        self.processes
            .iter()
            .zip(&self.remaining)
            .filter(|(_, r)| **r > 0)
            .map(|(p, _)| p.arrival)
            .min()
    }

    /// Runs the process at `pos` for up to `len` ticks starting at `start`.
    ///
    /// Records a slice, consumes burst and marks completion when the
    /// remaining burst reaches zero. Returns the slice end time.
    pub(crate) fn run(&mut self, pos: usize, start: Ticks, len: Ticks) -> Ticks {
        let len = len.min(self.remaining[pos]);
        let end = start + len;
        if len == 0 {
            return start;
        }

        let process = self.processes[pos].index;
        trace!(process, start, end, "execute");

        self.slices.push(ExecutionSlice::new(process, start, end));
        self.first_start[pos].get_or_insert(start);
        self.remaining[pos] -= len;

        if self.remaining[pos] == 0 {
            self.completion[pos] = Some(end);
            self.finish_order.push(pos);
        }
        end
    }

    /// Builds the final schedule.
    ///
    /// Turnaround and waiting are recomputed from completion, arrival and
    /// burst for every record.
    pub(crate) fn finish(self, algorithm: Algorithm, order: RecordOrder) -> Schedule {
        let positions: Vec<usize> = match order {
            RecordOrder::Index => (0..self.processes.len())
                .filter(|&pos| self.completion[pos].is_some())
                .collect(),
            RecordOrder::Completion => self.finish_order.clone(),
        };

        let records = positions
            .into_iter()
            .filter_map(|pos| {
                let process = &self.processes[pos];
                let end = self.completion[pos]?;
                let start = self.first_start[pos].unwrap_or(end);
                Some(ScheduleRecord::derive(process, start, end))
            })
            .collect();

        Schedule {
            algorithm,
            records,
            slices: self.slices,
        }
    }
}
