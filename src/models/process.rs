//! Process model.
//!
//! A process is a CPU-bound unit of work identified by its 1-based position
//! in the input sequences. The process set is fixed for one run.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Simulation time unit.
pub type Ticks = u64;

/// A CPU-bound process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// 1-based position in the input sequences (identity key).
    pub index: usize,
    /// Earliest time the process is eligible to run.
    pub arrival: Ticks,
    /// Total CPU service time required.
    pub burst: Ticks,
}

impl Process {
    /// Creates a new process.
    pub fn new(index: usize, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            index,
            arrival,
            burst,
        }
    }

    /// Builds a process set from order-correlated arrival and burst slices.
    ///
    /// Pairs are zipped positionally; callers check lengths beforehand
    /// (see [`validate_input`](crate::validation::validate_input)).
    pub fn from_pairs(arrivals: &[Ticks], bursts: &[Ticks]) -> Vec<Self> {
        arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(i, (&arrival, &burst))| Self::new(i + 1, arrival, burst))
            .collect()
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: Ticks) -> bool {
        self.arrival <= t
    }
}

/// Sum of burst times across a process set.
pub fn total_burst(processes: &[Process]) -> Ticks {
    processes.iter().map(|p| p.burst).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let ps = Process::from_pairs(&[0, 1, 2], &[5, 3, 1]);
        assert_eq!(ps.len(), 3);
        assert_eq!(ps[0], Process::new(1, 0, 5));
        assert_eq!(ps[2], Process::new(3, 2, 1));
        assert_eq!(total_burst(&ps), 9);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 4, 2);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }
}
