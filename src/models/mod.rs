//! CPU scheduling domain models.
//!
//! Provides the data types shared by every algorithm: the input
//! [`Process`], the intermediate [`ExecutionSlice`], and the per-process
//! [`ScheduleRecord`] collected into a [`Schedule`].
//!
//! # Derived Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | `end - arrival` |
//! | Waiting | `turnaround - burst` |
//! | Response | `start - arrival` |

mod algorithm;
mod process;
mod record;
mod schedule;
mod slice;

pub use algorithm::Algorithm;
pub use process::{total_burst, Process, Ticks};
pub use record::ScheduleRecord;
pub use schedule::{IdleGap, Schedule};
pub use slice::{coalesce, ExecutionSlice};
