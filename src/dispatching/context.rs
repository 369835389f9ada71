//! Dispatch context for rule evaluation.

use crate::models::{Process, Ticks};

/// Runtime state passed to dispatching rules at one decision point.
///
/// Borrows the run's remaining-burst table; the table itself stays owned
/// by the run that created it.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    /// Current simulation time.
    pub current_time: Ticks,
    /// Remaining burst per process, indexed by `process.index - 1`.
    pub remaining: &'a [Ticks],
}

impl<'a> DispatchContext<'a> {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Ticks, remaining: &'a [Ticks]) -> Self {
        Self {
            current_time,
            remaining,
        }
    }

    /// Remaining burst of a process (0 if unknown).
    #[inline]
    pub fn remaining_of(&self, process: &Process) -> Ticks {
        process
            .index
            .checked_sub(1)
            .and_then(|i| self.remaining.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Whether a process is ready: arrived and not finished.
    #[inline]
    pub fn is_ready(&self, process: &Process) -> bool {
        process.has_arrived(self.current_time) && self.remaining_of(process) > 0
    }

    /// Time a process has spent waiting since arrival.
    #[inline]
    pub fn waited(&self, process: &Process) -> Ticks {
        self.current_time.saturating_sub(process.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_requires_arrival_and_work() {
        let remaining = [3, 0, 2];
        let ctx = DispatchContext::at_time(2, &remaining);

        assert!(ctx.is_ready(&Process::new(1, 0, 3)));
        assert!(!ctx.is_ready(&Process::new(2, 0, 4))); // finished
        assert!(!ctx.is_ready(&Process::new(3, 5, 2))); // not arrived
        assert_eq!(ctx.waited(&Process::new(1, 0, 3)), 2);
        assert_eq!(ctx.waited(&Process::new(3, 5, 2)), 0);
    }
}
