//! Shortest Remaining Time (preemptive SJF).
//!
//! # Algorithm
//!
//! 1. Admit every arrived process into a ready queue ordered by remaining time (ties FIFO).
//! 2. Pop the front. Record a timeline event only if it differs from the last process popped.
//! 3. If another process arrives before the front one would finish, run only
//!    up to that arrival and put the interrupted process back in the queue.
//! 4. Otherwise run it to completion.
//!
//! The interrupted process is re-queued before newcomers are admitted, so a
//! newcomer with equal remaining time does not preempt it.

use tracing::trace;

use super::backlog::Backlog;
use super::Policy;
use crate::dispatching::{rules, ReadyQueue, SchedulingContext};
use crate::models::{ProcessRecord, ProcessState, Timeline, TimelineEvent};

/// Preemptive shortest-remaining-time-first policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl Policy for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn simulate(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut backlog = Backlog::new(processes);
        let mut ready = ReadyQueue::new(rules::Srpt);
        let Some(mut clock) = backlog.next_arrival() else {
            return timeline;
        };
        let mut last: Option<usize> = None;

        loop {
            backlog.admit(&mut ready, clock);

            let Some(mut entry) = ready.pop() else {
                match backlog.next_arrival() {
                    Some(next) => {
                        trace!(from = clock, to = next, "cpu idle");
                        timeline.push(TimelineEvent::idle(clock));
                        clock = next;
                        last = None;
                        continue;
                    }
                    None => break,
                }
            };

            let process = &mut processes[entry.index];
            if last != Some(entry.index) {
                trace!(process = %process.name, clock, remaining = entry.remaining, "dispatch");
                timeline.push(TimelineEvent::process(clock, process.name.clone()));
                last = Some(entry.index);
            }
            process.state = ProcessState::Running;

            match backlog.next_arrival() {
                Some(next) if next < clock + entry.remaining => {
                    entry.remaining -= next - clock;
                    clock = next;
                    trace!(process = %process.name, clock, remaining = entry.remaining, "interrupted");
                    process.state = ProcessState::Idle;
                    ready.insert(entry, &SchedulingContext::at_time(clock));
                }
                _ => {
                    clock += entry.remaining;
                    process.complete_at(clock);
                }
            }
        }

        timeline.push(TimelineEvent::end(clock));
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Engine, Scheduler};

    #[test]
    fn test_srt_preempts_for_shorter_newcomer() {
        let mut engine = Engine::new(ShortestRemainingTime);
        engine.add(ProcessRecord::new("A", 0, 10));
        engine.add(ProcessRecord::new("B", 3, 2));

        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (3, "B".to_string()),
                (5, "A".to_string()),
                (12, "END".to_string()),
            ]
        );
        let results = engine.results().unwrap();
        assert_eq!((results[0].response, results[0].waiting), (Some(12), Some(2)));
        assert_eq!((results[1].response, results[1].waiting), (Some(2), Some(0)));
    }

    #[test]
    fn test_srt_no_duplicate_event_when_longer_newcomer_arrives() {
        let mut engine = Engine::new(ShortestRemainingTime);
        engine.add(ProcessRecord::new("A", 0, 10));
        engine.add(ProcessRecord::new("B", 3, 20));
        engine.add(ProcessRecord::new("C", 6, 30));

        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (10, "B".to_string()),
                (30, "C".to_string()),
                (60, "END".to_string()),
            ]
        );
    }

    #[test]
    fn test_srt_equal_remaining_does_not_preempt() {
        let mut engine = Engine::new(ShortestRemainingTime);
        engine.add(ProcessRecord::new("A", 0, 5));
        // At t=2, A has 3 left; B needs 3 → A keeps the CPU.
        engine.add(ProcessRecord::new("B", 2, 3));

        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (5, "B".to_string()),
                (8, "END".to_string()),
            ]
        );
    }

    #[test]
    fn test_srt_newcomer_arriving_at_completion_instant() {
        let mut engine = Engine::new(ShortestRemainingTime);
        engine.add(ProcessRecord::new("A", 0, 4));
        engine.add(ProcessRecord::new("B", 4, 1));

        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (4, "B".to_string()),
                (5, "END".to_string()),
            ]
        );
    }

    #[test]
    fn test_srt_nested_preemption() {
        let mut engine = Engine::new(ShortestRemainingTime);
        engine.add(ProcessRecord::new("A", 0, 8));
        engine.add(ProcessRecord::new("B", 1, 4));
        engine.add(ProcessRecord::new("C", 2, 1));

        // A 0-1, B 1-2, C 2-3, B 3-6, A 6-13
        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (1, "B".to_string()),
                (2, "C".to_string()),
                (3, "B".to_string()),
                (6, "A".to_string()),
                (13, "END".to_string()),
            ]
        );
        let results = engine.results().unwrap();
        assert_eq!(results[0].response, Some(13));
        assert_eq!(results[1].response, Some(5));
        assert_eq!(results[2].response, Some(1));
    }

    #[test]
    fn test_srt_idle_gap() {
        let mut engine = Engine::new(ShortestRemainingTime);
        engine.add(ProcessRecord::new("A", 0, 2));
        engine.add(ProcessRecord::new("B", 5, 2));

        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (2, "IDLE".to_string()),
                (5, "B".to_string()),
                (7, "END".to_string()),
            ]
        );
    }
}
