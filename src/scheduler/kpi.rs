//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Turnaround | Mean of `end - arrival` |
//! | Avg Waiting | Mean of `turnaround - burst` |
//! | Avg Response | Mean of `start - arrival` |
//! | Utilization | Busy time / makespan |
//! | Throughput | Completed processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Ticks};

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: Ticks,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time (first allocation - arrival).
    pub avg_response: f64,
    /// Longest waiting time of any single process.
    pub max_waiting: Ticks,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Total idle time before the makespan.
    pub idle_time: Ticks,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let makespan = schedule.makespan();
        let count = schedule.record_count();

        let avg_response = if count == 0 {
            0.0
        } else {
            let total: Ticks = schedule.records.iter().map(|r| r.response()).sum();
            total as f64 / count as f64
        };

        let max_waiting = schedule
            .records
            .iter()
            .map(|r| r.waiting)
            .max()
            .unwrap_or(0);

        let (utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                schedule.busy_time() as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            avg_turnaround: schedule.average_turnaround().unwrap_or(0.0),
            avg_waiting: schedule.average_waiting().unwrap_or(0.0),
            avg_response,
            max_waiting,
            utilization,
            throughput,
            idle_time: schedule.idle_time(),
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting <= max_avg_waiting && self.utilization >= min_utilization
    }
}
