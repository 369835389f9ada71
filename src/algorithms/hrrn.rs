//! Highest-Response-Ratio-Next.
//!
//! `ratio = (waited + remaining) / remaining`. Waiting raises a process's
//! ratio, so long jobs age into priority instead of starving.
//!
//! Two modes are supported (see [`HrrnMode`]). `UnitStep` re-evaluates the
//! ratio every tick and commits the winner for one unit; `NonPreemptive` is
//! the textbook form that selects once and runs to completion.

use serde::{Deserialize, Serialize};

use super::dispatch_loop;
use super::tracker::{RecordOrder, RunTracker};
use crate::dispatching::{rules, Dispatcher};
use crate::models::{Algorithm, Process, Schedule};

/// How often HRRN re-evaluates response ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HrrnMode {
    /// Re-rank every tick; the winner runs for a single unit.
    #[default]
    UnitStep,
    /// Rank once per decision; the winner runs its full burst.
    NonPreemptive,
}

impl HrrnMode {
    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, HrrnMode::UnitStep)
    }
}

/// Schedules processes by highest response ratio.
///
/// Ties go to the lowest process index. Records are returned in completion
/// order. The run ends when every remaining burst reaches zero, so idle
/// gaps never cut a process short.
pub fn hrrn(processes: &[Process], mode: HrrnMode) -> Schedule {
    let mut tracker = RunTracker::new(processes);
    let dispatcher = Dispatcher::new(rules::HighestResponseRatio);

    match mode {
        HrrnMode::UnitStep => dispatch_loop(processes, &mut tracker, &dispatcher, |_| 1),
        HrrnMode::NonPreemptive => {
            dispatch_loop(processes, &mut tracker, &dispatcher, |remaining| remaining)
        }
    }

    tracker.finish(Algorithm::Hrrn, RecordOrder::Completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::response_ratio;

    // P1 (arr 0, 3), P2 (arr 1, 6), P3 (arr 2, 1)
    fn sample() -> Vec<Process> {
        Process::from_pairs(&[0, 1, 2], &[3, 6, 1])
    }

    #[test]
    fn test_hrrn_non_preemptive() {
        // t=0: P1 runs to 3.
        // t=3: P2 = (2+6)/6 = 1.33, P3 = (1+1)/1 = 2.0 → P3 runs [3,4)
        // t=4: P2 runs [4,10)
        let s = hrrn(&sample(), HrrnMode::NonPreemptive);

        let order: Vec<usize> = s.slices.iter().map(|sl| sl.process).collect();
        assert_eq!(order, vec![1, 3, 2]);

        let p2 = s.record_for(2).unwrap();
        assert_eq!((p2.start, p2.end, p2.turnaround, p2.waiting), (4, 10, 9, 3));
        let p3 = s.record_for(3).unwrap();
        assert_eq!((p3.start, p3.end, p3.waiting), (3, 4, 1));
    }

    #[test]
    fn test_hrrn_unit_step() {
        // t=0: P1 alone. t=1: P1 (1+2)/2 = 1.5, P2 (0+6)/6 = 1.0 → P1.
        // t=2: P1 (2+1)/1 = 3.0, P3 (0+1)/1 = 1.0 → P1, done at 3.
        // t=3: P2 (2+6)/6 = 1.33, P3 (1+1)/1 = 2.0 → P3, done at 4.
        // t=4..10: P2 alone.
        let s = hrrn(&sample(), HrrnMode::UnitStep);

        let completion: Vec<usize> = s.records.iter().map(|r| r.process).collect();
        assert_eq!(completion, vec![1, 3, 2]);
        assert_eq!(s.slices.len(), 10);
        assert_eq!(s.makespan(), 10);
    }

    #[test]
    fn test_hrrn_unit_step_can_preempt() {
        // t=0: P1 (rem 4) runs. t=1: P2 arrives rem 1 ratio 1.0 vs P1 (1+3)/3 = 1.33 → P1.
        // t=2: P1 (2+2)/2 = 2.0 vs P2 (1+1)/1 = 2.0 → tie, P1 keeps it.
        // t=3: P1 (3+1)/1 = 4.0 vs P2 (2+1)/1 = 3.0 → P1, done at 4.
        let processes = Process::from_pairs(&[0, 1], &[4, 1]);
        let s = hrrn(&processes, HrrnMode::UnitStep);
        assert_eq!(s.record_for(1).unwrap().end, 4);
        assert_eq!(s.record_for(2).unwrap().start, 4);
    }

    #[test]
    fn test_hrrn_unit_step_follows_close_ratios() {
        // t=0 ties at 1.0 so P1 runs; at t=1 P2's ratio 1.0000100001 beats
        // P1's 1.00001 and P2 takes the CPU.
        let processes = Process::from_pairs(&[0, 0], &[100_001, 99_999]);
        let s = hrrn(&processes, HrrnMode::UnitStep);
        assert_eq!(s.slices[0].process, 1);
        assert_eq!((s.slices[1].process, s.slices[1].start), (2, 1));
    }

    #[test]
    fn test_hrrn_survives_idle_gap() {
        // The run continues past sum(bursts) = 2 because of the idle gap
        let processes = Process::from_pairs(&[0, 4], &[1, 1]);
        for mode in [HrrnMode::UnitStep, HrrnMode::NonPreemptive] {
            let s = hrrn(&processes, mode);
            assert_eq!(s.record_count(), 2);
            assert_eq!(s.record_for(2).unwrap().end, 5);
        }
    }

    #[test]
    fn test_ratio_grows_with_waiting() {
        let mut prev = response_ratio(0, 5);
        for waited in 1..20 {
            let r = response_ratio(waited, 5);
            assert!(r >= prev);
            prev = r;
        }
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(HrrnMode::default(), HrrnMode::UnitStep);
        assert!(HrrnMode::UnitStep.is_preemptive());
        assert!(!HrrnMode::NonPreemptive.is_preemptive());
    }
}
