//! Shortest-Remaining-Time (preemptive).
//!
//! Time advances in unit steps. Every tick the ready process with the least
//! remaining burst runs for one unit, so a newly arrived shorter job
//! preempts the current one at the next tick boundary.

use super::dispatch_loop;
use super::tracker::{RecordOrder, RunTracker};
use crate::dispatching::{rules, Dispatcher};
use crate::models::{Algorithm, Process, Schedule};

/// Schedules processes by shortest remaining time, one tick at a time.
///
/// Ties go to the lowest process index. Records are returned in completion
/// order with `start` set to each process's first executed unit; `slices`
/// are unit length (see [`Schedule::timeline`] for merged runs).
pub fn srt(processes: &[Process]) -> Schedule {
    let mut tracker = RunTracker::new(processes);
    let dispatcher = Dispatcher::new(rules::ShortestRemaining);

    dispatch_loop(processes, &mut tracker, &dispatcher, |_| 1);

    tracker.finish(Algorithm::Srt, RecordOrder::Completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    #[test]
    fn test_srt_preempts_longer_job() {
        // P1 runs [0,1), P2 (3) arrives at 1 with less remaining than P1 (4)
        let processes = Process::from_pairs(&[0, 1], &[5, 3]);
        let s = srt(&processes);

        assert_eq!(
            s.timeline(),
            vec![
                ExecutionSlice::new(1, 0, 1),
                ExecutionSlice::new(2, 1, 4),
                ExecutionSlice::new(1, 4, 8),
            ]
        );

        // Completion order: P2 then P1
        assert_eq!(s.records[0].process, 2);
        assert_eq!(s.records[1].process, 1);

        let p1 = s.record_for(1).unwrap();
        assert_eq!((p1.start, p1.end, p1.turnaround, p1.waiting), (0, 8, 8, 3));
        let p2 = s.record_for(2).unwrap();
        assert_eq!((p2.start, p2.end, p2.turnaround, p2.waiting), (1, 4, 3, 0));
    }

    #[test]
    fn test_srt_tie_keeps_lowest_index() {
        // Equal remaining at t=1: P1 (rem 2) vs P2 (rem 2) → P1 continues
        let processes = Process::from_pairs(&[0, 1], &[3, 2]);
        let s = srt(&processes);
        assert_eq!(s.records[0].process, 1);
        assert_eq!(s.record_for(1).unwrap().end, 3);
        assert_eq!(s.record_for(2).unwrap().start, 3);
    }

    #[test]
    fn test_srt_unit_slices() {
        let processes = Process::from_pairs(&[0], &[4]);
        let s = srt(&processes);
        assert_eq!(s.slices.len(), 4);
        assert!(s.slices.iter().all(|sl| sl.duration() == 1));
        assert_eq!(s.timeline().len(), 1);
    }

    #[test]
    fn test_srt_idle_gap() {
        let processes = Process::from_pairs(&[0, 5], &[2, 2]);
        let s = srt(&processes);
        assert_eq!(s.record_for(2).unwrap().start, 5);
        assert_eq!(s.makespan(), 7);
        assert_eq!(s.idle_time(), 3);
    }
}
