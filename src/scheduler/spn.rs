//! Shortest Process Next (non-preemptive SJF).
//!
//! # Algorithm
//!
//! 1. Start the clock at the first arrival.
//! 2. Admit every arrived process into a ready queue ordered by burst (ties FIFO).
//! 3. Run the shortest to completion; repeat.
//!
//! If nothing is ready, the clock jumps to the next arrival.

use tracing::trace;

use super::backlog::Backlog;
use super::Policy;
use crate::dispatching::{rules, ReadyQueue};
use crate::models::{ProcessRecord, ProcessState, Timeline, TimelineEvent};

/// Non-preemptive shortest-burst-first policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestProcessNext;

impl Policy for ShortestProcessNext {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn simulate(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut backlog = Backlog::new(processes);
        let mut ready = ReadyQueue::new(rules::Spt);
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
            trace!(process = %process.name, clock, burst = entry.burst, "dispatch");
            timeline.push(TimelineEvent::process(clock, process.name.clone()));
            process.state = ProcessState::Running;
            clock += entry.burst;
            process.complete_at(clock);
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
    fn test_spn_basic() {
        let mut engine = Engine::new(ShortestProcessNext);
        engine.add(ProcessRecord::new("A", 0, 5));
        engine.add(ProcessRecord::new("B", 1, 2));
        engine.add(ProcessRecord::new("C", 1, 1));

        let results = engine.results().unwrap();
        assert_eq!((results[0].response, results[0].waiting), (Some(5), Some(0)));
        assert_eq!((results[1].response, results[1].waiting), (Some(7), Some(5)));
        assert_eq!((results[2].response, results[2].waiting), (Some(5), Some(4)));

        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (5, "C".to_string()),
                (6, "B".to_string()),
                (8, "END".to_string()),
            ]
        );
    }

    #[test]
    fn test_spn_equal_bursts_fifo_by_arrival() {
        let mut engine = Engine::new(ShortestProcessNext);
        engine.add(ProcessRecord::new("A", 0, 4));
        engine.add(ProcessRecord::new("Y", 2, 3));
        engine.add(ProcessRecord::new("X", 1, 3));

        // X arrived first among the equal bursts, so it is admitted first.
        let names: Vec<String> = engine
            .timeline()
            .unwrap()
            .iter()
            .filter_map(|e| e.label.process_name().map(str::to_string))
            .collect();
        assert_eq!(names, vec!["A", "X", "Y"]);
    }

    #[test]
    fn test_spn_no_preemption() {
        let mut engine = Engine::new(ShortestProcessNext);
        engine.add(ProcessRecord::new("long", 0, 10));
        engine.add(ProcessRecord::new("short", 1, 1));

        let timeline = engine.timeline().unwrap().to_pairs();
        assert_eq!(timeline[1], (10, "short".to_string()));
    }

    #[test]
    fn test_spn_idle_gap() {
        let mut engine = Engine::new(ShortestProcessNext);
        engine.add(ProcessRecord::new("A", 0, 1));
        engine.add(ProcessRecord::new("B", 4, 2));

        assert_eq!(
            engine.timeline().unwrap().to_pairs(),
            vec![
                (0, "A".to_string()),
                (1, "IDLE".to_string()),
                (4, "B".to_string()),
                (6, "END".to_string()),
            ]
        );
        assert_eq!(engine.results().unwrap()[1].waiting, Some(0));
    }

    #[test]
    fn test_spn_large_bursts_keep_integer_order() {
        let mut engine = Engine::new(ShortestProcessNext);
        engine.add(ProcessRecord::new("A", 0, 1));
        engine.add(ProcessRecord::new("Y", 1, (1 << 51) + 1));
        engine.add(ProcessRecord::new("X", 1, 1 << 51));

        let pairs = engine.timeline().unwrap().to_pairs();
        assert_eq!(pairs[1], (1, "X".to_string()));
        assert_eq!(pairs[2], ((1 << 51) + 1, "Y".to_string()));
    }

    #[test]
    fn test_spn_rejects_bursts_past_time_limit() {
        let mut engine = Engine::new(ShortestProcessNext);
        engine.add(ProcessRecord::new("A", 0, 1));
        engine.add(ProcessRecord::new("Y", 1, (1 << 53) + 1));
        engine.add(ProcessRecord::new("X", 1, 1 << 53));

        let err = engine.timeline().unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            crate::validation::ValidationErrorKind::TimeOverflow
        );
    }
}
