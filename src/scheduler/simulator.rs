//! Simulation driver.
//!
//! Validates raw inputs, dispatches to the configured algorithm and returns
//! the resulting [`Schedule`]. Validation failures surface before any
//! simulation work is done.

use std::num::NonZeroU64;

use tracing::{debug, info, warn};

use super::SimulationConfig;
use crate::algorithms::{fcfs, hrrn, round_robin, sjf, srt, HrrnMode};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{total_burst, Algorithm, Process, Schedule, Ticks};
use crate::validation::{parse_quantum, parse_times, validate_input};

/// Runs one configured algorithm over validated inputs.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Algorithm;
/// use u_cpu_schedule::scheduler::{SimulationConfig, Simulator};
///
/// let simulator = Simulator::new(SimulationConfig::new(Algorithm::Fcfs));
/// let schedule = simulator.run(&[0, 1, 2], &[5, 3, 1]).unwrap();
///
/// assert_eq!(schedule.makespan(), 9);
/// assert_eq!(schedule.record_for(2).map(|r| r.waiting), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates inputs and runs the configured algorithm.
    ///
    /// # Errors
    /// - [`ScheduleError::InputShape`] if the sequences differ in length.
    /// - [`ScheduleError::InvalidParameter`] for an empty set, a zero burst,
    ///   a time horizon beyond [`Ticks`], or a missing/zero Round Robin quantum.
    pub fn run(&self, arrivals: &[Ticks], bursts: &[Ticks]) -> ScheduleResult<Schedule> {
        let quantum = self.config.validate().inspect_err(|e| {
            warn!(algorithm = %self.config.algorithm, error = %e, "rejected configuration")
        })?;
        let processes = validate_input(arrivals, bursts)
            .inspect_err(|e| warn!(error = %e, "rejected input"))?;

        debug!(
            algorithm = %self.config.algorithm,
            preemptive = self.config.is_preemptive(),
            processes = processes.len(),
            total_burst = total_burst(&processes),
            "starting simulation"
        );
        let schedule = dispatch(
            self.config.algorithm,
            &processes,
            quantum,
            self.config.hrrn_mode,
        )?;

        info!(
            algorithm = %schedule.algorithm,
            processes = schedule.record_count(),
            makespan = schedule.makespan(),
            idle = schedule.idle_time(),
            "simulation complete"
        );
        Ok(schedule)
    }

    /// Runs every algorithm over the same input.
    ///
    /// Round Robin uses `quantum`; the other algorithms ignore it. HRRN
    /// uses `hrrn_mode`.
    pub fn compare_all(
        arrivals: &[Ticks],
        bursts: &[Ticks],
        quantum: Option<Ticks>,
        hrrn_mode: HrrnMode,
    ) -> ScheduleResult<Vec<(Algorithm, Schedule)>> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                let mut config = SimulationConfig::new(algorithm).with_hrrn_mode(hrrn_mode);
                config.quantum = quantum;
                Simulator::new(config)
                    .run(arrivals, bursts)
                    .map(|schedule| (algorithm, schedule))
            })
            .collect()
    }
}

/// Maps an algorithm to its implementation.
fn dispatch(
    algorithm: Algorithm,
    processes: &[Process],
    quantum: Option<NonZeroU64>,
    hrrn_mode: HrrnMode,
) -> ScheduleResult<Schedule> {
    let schedule = match algorithm {
        Algorithm::Fcfs => fcfs(processes),
        Algorithm::Sjf => sjf(processes),
        Algorithm::Srt => srt(processes),
        Algorithm::RoundRobin => {
            let quantum = quantum
                .ok_or_else(|| ScheduleError::invalid("Round Robin requires a time quantum"))?;
            round_robin(processes, quantum)
        }
        Algorithm::Hrrn => hrrn(processes, hrrn_mode),
    };
    Ok(schedule)
}

/// Runs a simulation from raw text fields.
///
/// Mirrors a form-driven front end: the algorithm is named by string,
/// arrival and burst times are whitespace-separated integers, and the
/// quantum is an optional token.
///
/// # Example
/// ```
/// use u_cpu_schedule::scheduler::simulate;
///
/// let schedule = simulate("Round Robin", "0", "5", Some("2")).unwrap();
/// assert_eq!(schedule.slices.len(), 3);
///
/// assert!(simulate("Round Robin", "0", "5", None).is_err());
/// assert!(simulate("FCFS", "0 1", "5 x", None).is_err());
/// ```
pub fn simulate(
    algorithm: &str,
    arrivals: &str,
    bursts: &str,
    quantum: Option<&str>,
) -> ScheduleResult<Schedule> {
    let algorithm: Algorithm = algorithm.parse()?;
    let arrivals = parse_times("arrival times", arrivals)?;
    let bursts = parse_times("burst times", bursts)?;

    let mut config = SimulationConfig::new(algorithm);
    config.quantum = parse_quantum(quantum)?;

    Simulator::new(config).run(&arrivals, &bursts)
}
