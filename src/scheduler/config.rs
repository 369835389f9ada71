//! Simulation configuration.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::algorithms::HrrnMode;
use crate::error::ScheduleResult;
use crate::models::{Algorithm, Ticks};
use crate::validation::validate_quantum;

/// Which algorithm to run and how to parameterize it.
///
/// Deserializable from JSON, e.g.
/// `{"algorithm": "RoundRobin", "quantum": 2}`. Missing `quantum` and
/// `hrrn_mode` fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Selected scheduling discipline.
    pub algorithm: Algorithm,
    /// Time quantum. Required for Round Robin, ignored otherwise.
    #[serde(default)]
    pub quantum: Option<Ticks>,
    /// HRRN re-evaluation mode.
    #[serde(default)]
    pub hrrn_mode: HrrnMode,
}

impl SimulationConfig {
    /// Creates a configuration for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
            hrrn_mode: HrrnMode::default(),
        }
    }

    /// Shorthand for a Round Robin configuration.
    pub fn round_robin(quantum: Ticks) -> Self {
        Self::new(Algorithm::RoundRobin).with_quantum(quantum)
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the HRRN mode.
    pub fn with_hrrn_mode(mut self, mode: HrrnMode) -> Self {
        self.hrrn_mode = mode;
        self
    }

    /// Whether the configured run can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        match self.algorithm {
            Algorithm::Hrrn => self.hrrn_mode.is_preemptive(),
            other => other.is_preemptive(),
        }
    }

    /// Validates parameters, returning the effective quantum.
    pub fn validate(&self) -> ScheduleResult<Option<NonZeroU64>> {
        validate_quantum(self.algorithm, self.quantum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let c = SimulationConfig::new(Algorithm::Hrrn).with_hrrn_mode(HrrnMode::NonPreemptive);
        assert_eq!(c.algorithm, Algorithm::Hrrn);
        assert_eq!(c.quantum, None);
        assert_eq!(c.hrrn_mode, HrrnMode::NonPreemptive);
        assert_eq!(c.validate(), Ok(None));
    }

    #[test]
    fn test_preemption_follows_hrrn_mode() {
        let unit = SimulationConfig::new(Algorithm::Hrrn);
        assert!(unit.is_preemptive());
        assert!(!unit.with_hrrn_mode(HrrnMode::NonPreemptive).is_preemptive());
        assert!(SimulationConfig::round_robin(2).is_preemptive());
        assert!(!SimulationConfig::new(Algorithm::Fcfs).is_preemptive());
    }

    #[test]
    fn test_round_robin_validation() {
        assert!(SimulationConfig::new(Algorithm::RoundRobin).validate().is_err());
        assert_eq!(
            SimulationConfig::round_robin(2).validate(),
            Ok(NonZeroU64::new(2))
        );
    }

    #[test]
    fn test_config_from_json() {
        let c: SimulationConfig =
            serde_json::from_str(r#"{"algorithm": "RoundRobin", "quantum": 3}"#).unwrap();
        assert_eq!(c, SimulationConfig::round_robin(3));

        let c: SimulationConfig = serde_json::from_str(r#"{"algorithm": "Srt"}"#).unwrap();
        assert_eq!(c.hrrn_mode, HrrnMode::UnitStep);
        assert_eq!(c.quantum, None);
    }

    #[test]
    fn test_config_json_round_trip() {
        let c = SimulationConfig::new(Algorithm::Hrrn).with_hrrn_mode(HrrnMode::NonPreemptive);
        let json = serde_json::to_string(&c).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
