//! Highest Response Ratio Next.
//!
//! # Algorithm
//!
//! 1. Admit every arrived process, scoring it with
//!    `ratio = ((clock - arrival) + burst) / burst` at the admission clock.
//! 2. Run the highest ratio to completion (ties: first admitted first).
//! 3. Repeat.
//!
//! A process's ratio is frozen when it is admitted; it does not age while
//! it sits in the ready queue.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use tracing::trace;

use super::backlog::Backlog;
use super::Policy;
use crate::dispatching::{rules, ReadyQueue};
use crate::models::{ProcessRecord, ProcessState, Timeline, TimelineEvent};

/// Non-preemptive highest-response-ratio-first policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestResponseRatioNext;

impl Policy for HighestResponseRatioNext {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn simulate(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut backlog = Backlog::new(processes);
        let mut ready = ReadyQueue::new(rules::Hrr);
        let Some(mut clock) = backlog.next_arrival() else {
            return timeline;
        };

        loop {
            backlog.admit(&mut ready, clock);

            let Some(entry) = ready.pop() else {
                match backlog.next_arrival() {
                    Some(next) => {
                        trace!(from = clock, to = next, "cpu idle");
                        timeline.push(TimelineEvent::idle(clock));
                        clock = next;
                        continue;
                    }
                    None => break,
                }
            };

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
