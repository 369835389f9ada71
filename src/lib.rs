//! Uniprocessor CPU scheduling simulator.
//!
//! Computes per-process timing for a fixed set of CPU-bound processes under
//! five classical disciplines, and the execution timeline that produced it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionSlice`,
//!   `ScheduleRecord`, `Schedule`, `Algorithm`
//! - **`dispatching`**: Selection rules (SJF, SRT, HRRN) and the `Dispatcher`
//! - **`algorithms`**: `fcfs`, `sjf`, `srt`, `round_robin`, `hrrn`
//! - **`scheduler`**: `Simulator` driver, `SimulationConfig`, `ScheduleKpi`
//! - **`validation`**: Input integrity checks and token parsing
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::scheduler::{SimulationConfig, Simulator, ScheduleKpi};
//!
//! let simulator = Simulator::new(SimulationConfig::round_robin(2));
//! let schedule = simulator.run(&[0, 1, 2], &[5, 3, 1]).unwrap();
//! let kpi = ScheduleKpi::calculate(&schedule);
//!
//! assert_eq!(kpi.makespan, 9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod algorithms;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ScheduleError, ScheduleResult};
