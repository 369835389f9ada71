//! First-Come-First-Served.
//!
//! Processes run strictly in input order, each to completion. A process
//! never starts before it arrives; the CPU idles until it does.

use tracing::debug;

use super::tracker::{RecordOrder, RunTracker};
use crate::models::{Algorithm, Process, Schedule, Ticks};

/// Schedules processes in input order, non-preemptively.
///
/// # Example
/// ```
/// use u_cpu_schedule::algorithms::fcfs;
/// use u_cpu_schedule::models::Process;
///
/// let processes = Process::from_pairs(&[0, 1, 2], &[5, 3, 1]);
/// let schedule = fcfs(&processes);
/// assert_eq!(schedule.record_for(3).map(|r| r.waiting), Some(6));
/// ```
pub fn fcfs(processes: &[Process]) -> Schedule {
    let mut tracker = RunTracker::new(processes);
    let mut current: Ticks = 0;

    for (pos, process) in processes.iter().enumerate() {
        let start = current.max(process.arrival);
        if start > current {
            debug!(from = current, to = start, "cpu idle until next arrival");
        }
        current = tracker.run(pos, start, process.burst);
    }

    tracker.finish(Algorithm::Fcfs, RecordOrder::Index)
}
