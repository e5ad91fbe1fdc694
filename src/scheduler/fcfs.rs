//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable).
//! 2. Start the clock at the first arrival.
//! 3. Run each process to completion in order.
//!
//! Whether the clock jumps over idle gaps is controlled by [`IdlePolicy`].

use tracing::trace;

use super::backlog::arrival_order;
use super::{IdlePolicy, Policy};
use crate::models::{ProcessRecord, ProcessState, Timeline, TimelineEvent};

/// Non-preemptive, arrival-ordered policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs {
    idle: IdlePolicy,
}

impl Fcfs {
    /// Creates an FCFS policy that jumps over idle gaps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the idle-gap handling.
    pub fn with_idle_policy(mut self, idle: IdlePolicy) -> Self {
        self.idle = idle;
        self
    }

    /// Idle-gap handling in effect.
    pub fn idle_policy(&self) -> IdlePolicy {
        self.idle
    }
}

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let mut timeline = Timeline::new();
        let order = arrival_order(processes);
        let Some(mut clock) = order.first().map(|e| e.arrival) else {
            return timeline;
        };

        for entry in order {
            if self.idle == IdlePolicy::AdvanceClock && entry.arrival > clock {
                trace!(from = clock, to = entry.arrival, "cpu idle");
                timeline.push(TimelineEvent::idle(clock));
                clock = entry.arrival;
            }

            let process = &mut processes[entry.index];
            trace!(process = %process.name, clock, "dispatch");
            timeline.push(TimelineEvent::process(clock, process.name.clone()));
            process.state = ProcessState::Running;
            clock += entry.burst;
            process.complete_at(clock);
        }

        timeline.push(TimelineEvent::end(clock));
        timeline
    }
}
