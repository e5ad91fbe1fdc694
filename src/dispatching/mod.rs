//! Dispatching rules and the rule-ordered ready queue.
//!
//! Provides priority-based dispatching rules (FIFO, SPT, SRPT, HRR)
//! and the ordered-insertion ready queue shared by the policy engines.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{ReadyEntry, ReadyQueue, SchedulingContext};
//! use u_procsched::dispatching::rules;
//!
//! let mut queue = ReadyQueue::new(rules::Hrr);
//! let context = SchedulingContext::at_time(0);
//! queue.insert(ReadyEntry::fresh(0, 0, 4), &context);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod context;
mod queue;
pub mod rules;

pub use context::SchedulingContext;
pub use queue::ReadyQueue;

use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A process as seen by the ready queue.
///
/// `index` points back into the engine's process list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyEntry {
    /// Position of the process in the engine's list.
    pub index: usize,
    /// Arrival time.
    pub arrival: i64,
    /// Total burst.
    pub burst: i64,
    /// Work left to do.
    pub remaining: i64,
}

impl ReadyEntry {
    /// Creates an entry that has not run yet (`remaining == burst`).
    pub fn fresh(index: usize, arrival: i64, burst: i64) -> Self {
        Self {
            index,
            arrival,
            burst,
            remaining: burst,
        }
    }

    /// Sets the remaining work.
    pub fn with_remaining(mut self, remaining: i64) -> Self {
        self.remaining = remaining;
        self
    }
}

/// A dispatching rule that evaluates ready-queue priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for entries that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "HRR").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of an entry given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, entry: &ReadyEntry, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
