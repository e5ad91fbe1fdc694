//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FIFO
//! - **Time-based**: SPT, SRPT
//! - **Ratio-based**: HRR
//!
//! # Score Convention
//! All rules return lower scores for higher priority entries.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use super::{DispatchingRule, ReadyEntry, RuleScore, SchedulingContext};

/// First In First Out.
///
/// Prioritizes entries by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, entry: &ReadyEntry, _context: &SchedulingContext) -> RuleScore {
        entry.arrival as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes entries with the shortest total burst. Drives
/// non-preemptive Shortest Process Next.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, entry: &ReadyEntry, _context: &SchedulingContext) -> RuleScore {
        entry.burst as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Shortest Remaining Processing Time.
///
/// Prioritizes entries with the least work left. Drives preemptive
/// Shortest Remaining Time.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl DispatchingRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, entry: &ReadyEntry, _context: &SchedulingContext) -> RuleScore {
        entry.remaining as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}

/// Highest Response Ratio.
///
/// ratio = ((current_time - arrival) + burst) / burst.
/// Higher ratio = higher priority, so the score is the negated ratio.
///
/// # Reference
/// Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"
#[derive(Debug, Clone, Copy)]
pub struct Hrr;

impl Hrr {
    /// Response ratio of an entry at the context's clock.
    pub fn ratio(entry: &ReadyEntry, context: &SchedulingContext) -> f64 {
        if entry.burst <= 0 {
            return f64::MAX;
        }
        let waited = (context.current_time - entry.arrival) as f64;
        (waited + entry.burst as f64) / entry.burst as f64
    }
}

impl DispatchingRule for Hrr {
    fn name(&self) -> &'static str {
        "HRR"
    }

    fn evaluate(&self, entry: &ReadyEntry, context: &SchedulingContext) -> RuleScore {
        -Self::ratio(entry, context)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio"
    }
}
