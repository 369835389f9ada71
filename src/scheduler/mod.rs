//! Simulation driver, configuration, and KPI evaluation.
//!
//! # Driver
//!
//! [`Simulator`] validates raw arrival/burst sequences, dispatches to the
//! configured algorithm and logs the outcome. [`simulate`] does the same
//! from text fields.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes standard CPU scheduling metrics: makespan,
//! turnaround, waiting, response, utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod config;
mod kpi;
mod simulator;

pub use crate::models::Algorithm;
pub use config::SimulationConfig;
pub use kpi::ScheduleKpi;
pub use simulator::{simulate, Simulator};
