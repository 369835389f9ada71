//! Synthetic workload generation.
//!
//! Produces reproducible random process sets for benchmarking and
//! algorithm comparison. Arrivals follow a per-tick Bernoulli process;
//! bursts are drawn uniformly from a range.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Ticks;

/// Parameters for a random workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub processes: usize,
    /// Probability that a new process arrives on any given tick (0.0..=1.0).
    pub arrival_rate: f64,
    /// Shortest burst (inclusive, >= 1).
    pub min_burst: Ticks,
    /// Longest burst (inclusive).
    pub max_burst: Ticks,
    /// RNG seed.
    pub seed: u64,
}

/// Generated arrival and burst sequences, order-correlated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Arrival times, non-decreasing.
    pub arrivals: Vec<Ticks>,
    /// Burst times, all positive.
    pub bursts: Vec<Ticks>,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            processes: 8,
            arrival_rate: 0.5,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }
}

impl WorkloadSpec {
    /// Creates a spec for `processes` processes with default rates.
    pub fn new(processes: usize) -> Self {
        Self {
            processes,
            ..Default::default()
        }
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_rate(mut self, rate: f64) -> Self {
        self.arrival_rate = rate;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min: Ticks, max: Ticks) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates a workload. The same spec always yields the same workload.
    pub fn generate(&self) -> ScheduleResult<Workload> {
        if self.processes == 0 {
            return Err(ScheduleError::invalid("workload needs at least one process"));
        }
        if !(self.arrival_rate > 0.0 && self.arrival_rate <= 1.0) {
            return Err(ScheduleError::invalid(format!(
                "arrival rate {} outside (0, 1]",
                self.arrival_rate
            )));
        }
        if self.min_burst == 0 || self.min_burst > self.max_burst {
            return Err(ScheduleError::invalid(format!(
                "invalid burst range {}..={}",
                self.min_burst, self.max_burst
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrivals = Vec::with_capacity(self.processes);
        let mut bursts = Vec::with_capacity(self.processes);
        let mut t: Ticks = 0;

        while arrivals.len() < self.processes {
            if rng.random::<f64>() < self.arrival_rate {
                arrivals.push(t);
                bursts.push(rng.random_range(self.min_burst..=self.max_burst));
            } else {
                t += 1;
            }
        }

        Ok(Workload { arrivals, bursts })
    }
}
