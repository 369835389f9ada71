//! Shortest-Job-First (non-preemptive).
//!
//! At each decision point the ready process with the smallest total burst
//! runs to completion. With nothing ready the clock advances one tick at a
//! time until something arrives.

use super::dispatch_loop;
use super::tracker::{RecordOrder, RunTracker};
use crate::dispatching::{rules, Dispatcher};
use crate::models::{Algorithm, Process, Schedule};

/// Schedules processes by shortest burst, non-preemptively.
///
/// Ties go to the lowest process index. Records are returned in index
/// order; `slices` keep execution order.
pub fn sjf(processes: &[Process]) -> Schedule {
    let mut tracker = RunTracker::new(processes);
    let dispatcher = Dispatcher::new(rules::ShortestBurst);

    dispatch_loop(processes, &mut tracker, &dispatcher, |remaining| remaining);

    tracker.finish(Algorithm::Sjf, RecordOrder::Index)
}
