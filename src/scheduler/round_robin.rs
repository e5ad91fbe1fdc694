//! Round Robin with context-switch overhead.
//!
//! # Algorithm
//!
//! 1. Queue all processes by arrival (stable); start the clock at the first arrival.
//! 2. Pop the front; run it for `min(remaining, quantum)`.
//! 3. If unfinished, push it to the back.
//! 4. Record a quantum boundary and charge `change_time` after every slice.
//! 5. The trailing boundary is replaced by the end marker (no switch after the last slice).
//!
//! The queue is fixed up front: arrival times only decide the initial order.

use std::collections::VecDeque;

use tracing::trace;

use super::backlog::arrival_order;
use super::config::{DEFAULT_CHANGE_TIME, DEFAULT_QUANTUM};
use super::Policy;
use crate::models::{ProcessRecord, ProcessState, Timeline, TimelineEvent, TimelineLabel};
use crate::validation::{validate_round_robin_batch, ValidationResult};

/// Preemptive time-slice policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
    change_time: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    pub fn new(quantum: i64, change_time: i64) -> Self {
        Self {
            quantum,
            change_time,
        }
    }

    /// Time slice.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Context-switch overhead.
    pub fn change_time(&self) -> i64 {
        self.change_time
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM, DEFAULT_CHANGE_TIME)
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn validate(&self, processes: &[ProcessRecord]) -> ValidationResult {
        validate_round_robin_batch(processes, self.quantum, self.change_time)
    }

    fn simulate(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut queue: VecDeque<_> = arrival_order(processes).into();
        let Some(mut clock) = queue.front().map(|e| e.arrival) else {
            return timeline;
        };

        while let Some(mut entry) = queue.pop_front() {
            let process = &mut processes[entry.index];
            trace!(process = %process.name, clock, remaining = entry.remaining, "slice");
            timeline.push(TimelineEvent::process(clock, process.name.clone()));
            process.state = ProcessState::Running;

            if entry.remaining <= self.quantum {
                clock += entry.remaining;
                process.complete_at(clock);
            } else {
                clock += self.quantum;
                entry.remaining -= self.quantum;
                process.state = ProcessState::Idle;
                queue.push_back(entry);
            }

            timeline.push(TimelineEvent::quantum(clock));
            clock += self.change_time;
        }

        if timeline
            .events()
            .last()
            .is_some_and(|e| e.label == TimelineLabel::QuantumBoundary)
        {
            timeline.pop();
        }
        timeline.push(TimelineEvent::end(clock - self.change_time));
        timeline
    }
}
