//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use std::cmp::Ordering;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::{Process, Ticks};

/// Shortest Job First.
///
/// Prioritizes processes with the shortest total burst. Used by the
/// non-preemptive SJF discipline, where a selected process always runs its
/// full burst.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext<'_>) -> RuleScore {
        process.burst as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }

    fn compare(&self, a: &Process, b: &Process, _context: &DispatchContext<'_>) -> Ordering {
        a.burst.cmp(&b.burst)
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process, context: &DispatchContext<'_>) -> RuleScore {
        context.remaining_of(process) as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext<'_>) -> Ordering {
        context.remaining_of(a).cmp(&context.remaining_of(b))
    }
}

/// Highest Response Ratio Next.
///
/// `ratio = (waited + remaining) / remaining`. Ratios grow while a process
/// waits, so long jobs cannot starve. Negated to fit the score convention.
///
/// Selection compares ratios exactly: `ratio = 1 + waited / remaining`, so
/// `a` outranks `b` when `waited_a * remaining_b > waited_b * remaining_a`.
/// Both products fit in `u128`.
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl DispatchingRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, process: &Process, context: &DispatchContext<'_>) -> RuleScore {
        let remaining = context.remaining_of(process);
        if remaining == 0 {
            return f64::MAX;
        }
        -response_ratio(context.waited(process), remaining)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext<'_>) -> Ordering {
        let (ra, rb) = (context.remaining_of(a), context.remaining_of(b));
        match (ra, rb) {
            (0, 0) => Ordering::Equal,
            (0, _) => Ordering::Greater,
            (_, 0) => Ordering::Less,
            _ => {
                let lhs = u128::from(context.waited(a)) * u128::from(rb);
                let rhs = u128::from(context.waited(b)) * u128::from(ra);
                // higher ratio first
                rhs.cmp(&lhs)
            }
        }
    }
}

/// Response ratio `(waited + remaining) / remaining`.
///
/// Always `>= 1.0` for `remaining > 0`.
pub fn response_ratio(waited: Ticks, remaining: Ticks) -> f64 {
    (waited + remaining) as f64 / remaining as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_uses_total_burst() {
        let remaining = [1];
        let ctx = DispatchContext::at_time(0, &remaining);
        let p = Process::new(1, 0, 6);
        assert!((ShortestBurst.evaluate(&p, &ctx) - 6.0).abs() < 1e-10);
        assert!((ShortestRemaining.evaluate(&p, &ctx) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_response_ratio_values() {
        assert!((response_ratio(0, 4) - 1.0).abs() < 1e-10);
        assert!((response_ratio(6, 3) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_hrrn_prefers_higher_ratio() {
        let remaining = [4, 2];
        let ctx = DispatchContext::at_time(4, &remaining);
        let a = Process::new(1, 0, 4); // (4 + 4) / 4 = 2.0
        let b = Process::new(2, 0, 2); // (4 + 2) / 2 = 3.0
        assert!(HighestResponseRatio.evaluate(&b, &ctx) < HighestResponseRatio.evaluate(&a, &ctx));
    }

    #[test]
    fn test_hrrn_compare_is_exact() {
        // Ratios 1.00001 and 1.0000100001 differ only past the ninth decimal
        let remaining = [100_000, 99_999];
        let ctx = DispatchContext::at_time(1, &remaining);
        let a = Process::new(1, 0, 100_001);
        let b = Process::new(2, 0, 99_999);
        assert_eq!(HighestResponseRatio.compare(&b, &a, &ctx), Ordering::Less);
        assert_eq!(HighestResponseRatio.compare(&a, &b, &ctx), Ordering::Greater);
        assert_eq!(HighestResponseRatio.compare(&a, &a, &ctx), Ordering::Equal);
    }

    #[test]
    fn test_finished_process_ranks_last() {
        let remaining = [0, 5];
        let ctx = DispatchContext::at_time(3, &remaining);
        let done = Process::new(1, 0, 2);
        let waiting = Process::new(2, 0, 5);
        assert_eq!(HighestResponseRatio.compare(&done, &waiting, &ctx), Ordering::Greater);
        assert_eq!(ShortestRemaining.compare(&waiting, &done, &ctx), Ordering::Greater);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(ShortestRemaining.name(), "SRT");
        assert_eq!(HighestResponseRatio.name(), "HRRN");
    }
}
