//! Arrival-ordered backlog of processes that are not ready yet.

use std::collections::VecDeque;

use crate::dispatching::{rules, DispatchingRule, ReadyEntry, ReadyQueue, SchedulingContext};
use crate::models::ProcessRecord;

/// Processes sorted by arrival (stable: equal arrivals keep insertion order).
#[derive(Debug, Clone, Default)]
pub(crate) struct Backlog {
    pending: VecDeque<ReadyEntry>,
}

impl Backlog {
    /// Builds the backlog from an engine's process list.
    pub(crate) fn new(processes: &[ProcessRecord]) -> Self {
        Self {
            pending: arrival_order(processes).into(),
        }
    }

    /// Arrival time of the next pending process.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.pending.front().map(|e| e.arrival)
    }

    /// Moves every process with `arrival <= clock` into `ready`, in arrival
    /// order, scoring each at `clock`.
    pub(crate) fn admit<R: DispatchingRule>(&mut self, ready: &mut ReadyQueue<R>, clock: i64) {
        let context = SchedulingContext::at_time(clock);
        while let Some(entry) = self.pending.front().copied() {
            if entry.arrival > clock {
                break;
            }
            self.pending.pop_front();
            ready.insert(entry, &context);
        }
    }
}

/// Stable arrival-ordered entries for `processes`.
pub(crate) fn arrival_order(processes: &[ProcessRecord]) -> Vec<ReadyEntry> {
    let context = SchedulingContext::default();
    let mut queue = ReadyQueue::new(rules::Fifo);
    for (index, p) in processes.iter().enumerate() {
        queue.insert(ReadyEntry::fresh(index, p.arrival, p.burst), &context);
    }
    queue.drain().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new("late", 5, 1),
            ProcessRecord::new("first", 0, 3),
            ProcessRecord::new("mid_a", 2, 4),
            ProcessRecord::new("mid_b", 2, 2),
        ]
    }

    #[test]
    fn test_arrival_order_is_stable() {
        let order: Vec<usize> = arrival_order(&batch()).iter().map(|e| e.index).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_admit_up_to_clock() {
        let processes = batch();
        let mut backlog = Backlog::new(&processes);
        let mut ready = ReadyQueue::new(rules::Spt);

        assert_eq!(backlog.next_arrival(), Some(0));
        backlog.admit(&mut ready, 2);
        assert_eq!(ready.len(), 3);
        // mid_b (burst 2) before first (burst 3) before mid_a (burst 4)
        let order: Vec<usize> = ready.iter().map(|e| e.index).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(backlog.next_arrival(), Some(5));

        backlog.admit(&mut ready, 4);
        assert_eq!(ready.len(), 3);
        backlog.admit(&mut ready, 5);
        assert_eq!(backlog.next_arrival(), None);
        assert_eq!(ready.peek().map(|e| e.index), Some(0));
    }
}
