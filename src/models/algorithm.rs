//! Scheduling algorithm identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// The five supported uniprocessor scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time (preemptive).
    Srt,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
    /// Highest-Response-Ratio-Next.
    Hrrn,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srt,
        Algorithm::RoundRobin,
        Algorithm::Hrrn,
    ];

    /// Display name (e.g., "FCFS", "Round Robin").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srt => "SRT",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Hrrn => "HRRN",
        }
    }

    /// Whether the discipline always interrupts running processes.
    ///
    /// HRRN reports `false` here: it preempts only in
    /// [`HrrnMode::UnitStep`](crate::algorithms::HrrnMode::UnitStep). Use
    /// [`SimulationConfig::is_preemptive`](crate::scheduler::SimulationConfig::is_preemptive)
    /// for the answer under a concrete mode.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srt | Algorithm::RoundRobin)
    }

    /// Whether the discipline needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "srt" | "srtf" => Ok(Algorithm::Srt),
            "roundrobin" | "rr" => Ok(Algorithm::RoundRobin),
            "hrrn" => Ok(Algorithm::Hrrn),
            _ => Err(ScheduleError::invalid(format!(
                "unrecognized algorithm '{}'",
                s.trim()
            ))),
        }
    }
}
