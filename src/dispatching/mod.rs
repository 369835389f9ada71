//! Dispatching rules and selection engine.
//!
//! Provides the priority rules (SJF, SRT, HRRN) used by the selecting
//! algorithms and a [`Dispatcher`] that applies a rule to the ready set.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{rules, DispatchContext, Dispatcher};
//! use u_cpu_schedule::models::Process;
//!
//! let processes = Process::from_pairs(&[0, 0], &[5, 2]);
//! let remaining = [5, 2];
//! let context = DispatchContext::at_time(0, &remaining);
//!
//! let dispatcher = Dispatcher::new(rules::ShortestRemaining);
//! assert_eq!(dispatcher.select(&processes, &context), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::Dispatcher;

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a ready process at the current decision point.
    fn evaluate(&self, process: &Process, context: &DispatchContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Orders two ready processes; `Less` means `a` runs before `b`.
    ///
    /// Defaults to comparing scores. Rules whose scores lose precision as
    /// `f64` override this with an exact comparison.
    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext<'_>) -> Ordering {
        self.evaluate(a, context).total_cmp(&self.evaluate(b, context))
    }
}
