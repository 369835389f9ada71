//! The five scheduling disciplines.
//!
//! Every algorithm is a pure function over a process slice: it allocates
//! its own bookkeeping, simulates the run, and returns a fresh
//! [`Schedule`](crate::models::Schedule). Nothing is shared between calls,
//! so runs may execute concurrently.
//!
//! | Function | Policy | Preemptive | Record order |
//! |----------|--------|------------|--------------|
//! | [`fcfs`] | input order | no | index |
//! | [`sjf`] | shortest burst | no | index |
//! | [`srt`] | shortest remaining | yes (unit step) | completion |
//! | [`round_robin`] | index sweep, quantum | yes | completion |
//! | [`hrrn`] | highest response ratio | mode-dependent | completion |
//!
//! # Input Contract
//! `processes[i].index == i + 1`, bursts strictly positive, and the latest
//! arrival plus the total burst fits in [`Ticks`]. Use
//! [`validate_input`](crate::validation::validate_input) to build a
//! conforming slice from raw sequences.

mod fcfs;
mod hrrn;
mod round_robin;
mod sjf;
mod srt;
mod tracker;

pub use fcfs::fcfs;
pub use hrrn::{hrrn, HrrnMode};
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use srt::srt;

use tracing::trace;

use crate::dispatching::{DispatchContext, Dispatcher};
use crate::models::{Process, Ticks};
use tracker::RunTracker;

/// Selection loop shared by SJF, SRT and HRRN.
///
/// At each decision point the dispatcher picks a ready process, which then
/// runs for `run_length(remaining)` ticks. With nothing ready the clock
/// advances by one tick.
fn dispatch_loop(
    processes: &[Process],
    tracker: &mut RunTracker<'_>,
    dispatcher: &Dispatcher,
    run_length: impl Fn(Ticks) -> Ticks,
) {
    let mut current: Ticks = 0;

    while !tracker.is_done() {
        let context = DispatchContext::at_time(current, tracker.remaining());
        match dispatcher.select(processes, &context) {
            Some(pos) => {
                let len = run_length(tracker.remaining_of(pos));
                current = tracker.run(pos, current, len);
            }
            None => {
                trace!(time = current, rule = dispatcher.rule_name(), "nothing ready");
                current += 1;
            }
        }
    }
}
