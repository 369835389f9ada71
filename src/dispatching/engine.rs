//! Selection engine for dispatching decisions.
//!
//! Scans ready processes in index order and picks the best one under the
//! rule's ordering. A later process displaces the current best only when it
//! compares strictly less, so ties always go to the lowest index.

use std::sync::Arc;

use super::{DispatchContext, DispatchingRule};
use crate::models::Process;

/// Picks the next process to run under a single dispatching rule.
///
/// # Example
/// ```
/// use u_cpu_schedule::dispatching::{rules, DispatchContext, Dispatcher};
/// use u_cpu_schedule::models::Process;
///
/// let processes = Process::from_pairs(&[0, 0], &[4, 4]);
/// let remaining = [4, 4];
/// let ctx = DispatchContext::at_time(0, &remaining);
///
/// let dispatcher = Dispatcher::new(rules::ShortestBurst);
/// assert_eq!(dispatcher.select(&processes, &ctx), Some(0));
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    rule: Arc<dyn DispatchingRule>,
}

impl Dispatcher {
    /// Creates a dispatcher for the given rule.
    pub fn new<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// Name of the underlying rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Returns the position (in `processes`) of the best ready process.
    ///
    /// `None` if no process is ready at `context.current_time`.
    pub fn select(&self, processes: &[Process], context: &DispatchContext<'_>) -> Option<usize> {
        let mut best: Option<usize> = None;

        for (pos, process) in processes.iter().enumerate() {
            if !context.is_ready(process) {
                continue;
            }
            let better = match best {
                Some(b) => self.rule.compare(process, &processes[b], context).is_lt(),
                None => true,
            };
            if better {
                best = Some(pos);
            }
        }

        best
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rule", &self.rule.name())
            .field("description", &self.rule.description())
            .finish()
    }
}
