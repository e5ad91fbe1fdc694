//! Rule-ordered ready queue.
//!
//! Keeps entries sorted by a dispatching rule's score, computed once at
//! insertion time. A new entry goes immediately before the first queued
//! entry whose score is strictly worse; equal scores keep insertion order
//! (FIFO tie-break).

use std::collections::VecDeque;

use super::{DispatchingRule, ReadyEntry, RuleScore, SchedulingContext};

/// A ready queue ordered by a dispatching rule.
///
/// Scores are frozen at insertion: an entry's position never changes
/// after it is queued, even if the rule depends on the clock.
///
/// # Example
/// ```
/// use u_procsched::dispatching::{ReadyEntry, ReadyQueue, SchedulingContext};
/// use u_procsched::dispatching::rules;
///
/// let ctx = SchedulingContext::at_time(0);
/// let mut queue = ReadyQueue::new(rules::Spt);
/// queue.insert(ReadyEntry::fresh(0, 0, 5), &ctx);
/// queue.insert(ReadyEntry::fresh(1, 0, 2), &ctx);
/// assert_eq!(queue.pop().map(|e| e.index), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct ReadyQueue<R: DispatchingRule> {
    rule: R,
    entries: VecDeque<(ReadyEntry, RuleScore)>,
    epsilon: f64,
}

impl<R: DispatchingRule> ReadyQueue<R> {
    /// Creates an empty queue ordered by `rule`.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            entries: VecDeque::new(),
            epsilon: 1e-9,
        }
    }

    /// Inserts an entry, scoring it at the context's clock.
    ///
    /// Returns the position the entry landed at.
    pub fn insert(&mut self, entry: ReadyEntry, context: &SchedulingContext) -> usize {
        let score = self.rule.evaluate(&entry, context);
        let position = self
            .entries
            .iter()
            .position(|(_, existing)| existing - score > self.epsilon)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, (entry, score));
        position
    }

    /// Removes and returns the highest-priority entry.
    pub fn pop(&mut self) -> Option<ReadyEntry> {
        self.entries.pop_front().map(|(entry, _)| entry)
    }

    /// Highest-priority entry without removing it.
    pub fn peek(&self) -> Option<&ReadyEntry> {
        self.entries.front().map(|(entry, _)| entry)
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queued entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &ReadyEntry> {
        self.entries.iter().map(|(entry, _)| entry)
    }

    /// Drains all entries in priority order.
    pub fn drain(&mut self) -> impl Iterator<Item = ReadyEntry> + '_ {
        self.entries.drain(..).map(|(entry, _)| entry)
    }

    /// The ordering rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}
