//! Round Robin.
//!
//! The scheduler sweeps the process table in index order. Each arrived
//! process with work left receives one turn of `min(quantum, remaining)`
//! ticks; unfinished processes stay in the rotation for the next sweep.
//! Processes that arrive while a sweep is in progress join it when the
//! sweep reaches their index.
//!
//! When a sweep finds nothing runnable the clock jumps straight to the
//! earliest pending arrival instead of stepping through the idle gap.

use std::num::NonZeroU64;

use tracing::debug;

use super::tracker::{RecordOrder, RunTracker};
use crate::models::{Algorithm, Process, Schedule, Ticks};

/// Schedules processes round robin with the given time quantum.
///
/// Records are returned in completion order with `start` set to each
/// process's first slice.
///
/// # Example
/// ```
/// use std::num::NonZeroU64;
/// use u_cpu_schedule::algorithms::round_robin;
/// use u_cpu_schedule::models::Process;
///
/// let processes = Process::from_pairs(&[0], &[5]);
/// let quantum = NonZeroU64::new(2).unwrap();
/// let schedule = round_robin(&processes, quantum);
///
/// let lengths: Vec<u64> = schedule.slices.iter().map(|s| s.duration()).collect();
/// assert_eq!(lengths, vec![2, 2, 1]);
/// ```
pub fn round_robin(processes: &[Process], quantum: NonZeroU64) -> Schedule {
    let quantum = quantum.get();
    let mut tracker = RunTracker::new(processes);
    let mut current: Ticks = 0;
    let mut sweeps: usize = 0;

    while !tracker.is_done() {
        let mut ran = false;

        for (pos, process) in processes.iter().enumerate() {
            let remaining = tracker.remaining_of(pos);
            if remaining == 0 || !process.has_arrived(current) {
                continue;
            }
            current = tracker.run(pos, current, quantum.min(remaining));
            ran = true;
        }
        sweeps += 1;

        if !ran {
            match tracker.next_arrival() {
                Some(next) => {
                    debug!(from = current, to = next, "cpu idle, skipping to next arrival");
                    current = next;
                }
                None => break,
            }
        }
    }

    debug!(sweeps, quantum, "round robin finished");
    tracker.finish(Algorithm::RoundRobin, RecordOrder::Completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    fn q(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn test_quantum_bound_single_process() {
        let processes = Process::from_pairs(&[0], &[5]);
        let s = round_robin(&processes, q(2));

        assert_eq!(
            s.slices,
            vec![
                ExecutionSlice::new(1, 0, 2),
                ExecutionSlice::new(1, 2, 4),
                ExecutionSlice::new(1, 4, 5),
            ]
        );
        let p1 = s.record_for(1).unwrap();
        assert_eq!((p1.start, p1.end, p1.waiting), (0, 5, 0));
    }

    #[test]
    fn test_rotation_between_processes() {
        // Sweep 1: P1 [0,2), P2 [2,4), P3 [4,5) done.
        // Sweep 2: P1 [5,7), P2 [7,8) done.
        // Sweep 3: P1 [8,9) done.
        let processes = Process::from_pairs(&[0, 1, 2], &[5, 3, 1]);
        let s = round_robin(&processes, q(2));

        let completion: Vec<usize> = s.records.iter().map(|r| r.process).collect();
        assert_eq!(completion, vec![3, 2, 1]);

        let p1 = s.record_for(1).unwrap();
        assert_eq!((p1.start, p1.end, p1.turnaround, p1.waiting), (0, 9, 9, 4));
        let p2 = s.record_for(2).unwrap();
        assert_eq!((p2.start, p2.end, p2.turnaround, p2.waiting), (2, 8, 7, 4));
        let p3 = s.record_for(3).unwrap();
        assert_eq!((p3.start, p3.end, p3.turnaround, p3.waiting), (4, 5, 3, 2));
        assert_eq!(s.slices_for(1).len(), 3);
    }

    #[test]
    fn test_idle_skip_jumps_to_arrival() {
        let processes = Process::from_pairs(&[0, 20], &[1, 3]);
        let s = round_robin(&processes, q(2));

        assert_eq!(
            s.slices,
            vec![
                ExecutionSlice::new(1, 0, 1),
                ExecutionSlice::new(2, 20, 22),
                ExecutionSlice::new(2, 22, 23),
            ]
        );
        assert_eq!(s.idle_time(), 19);
    }

    #[test]
    fn test_late_first_arrival() {
        let processes = Process::from_pairs(&[7], &[2]);
        let s = round_robin(&processes, q(4));
        let p1 = s.record_for(1).unwrap();
        assert_eq!((p1.start, p1.end, p1.waiting), (7, 9, 0));
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let processes = Process::from_pairs(&[0, 1, 2], &[5, 3, 1]);
        let s = round_robin(&processes, q(100));
        let ends: Vec<u64> = s.records_by_index().iter().map(|r| r.end).collect();
        assert_eq!(ends, vec![5, 8, 9]);
    }
}
