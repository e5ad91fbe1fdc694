//! Lazily-computing policy engine.
//!
//! Wraps a [`Policy`] with the process list it schedules and a cached
//! simulation. The cache is filled on the first read and dropped on every
//! `add`, so reads never observe stale results.

use tracing::debug;

use super::{Policy, Scheduler};
use crate::error::ScheduleError;
use crate::models::{ProcessRecord, Timeline};
use crate::validation::validate_batch;

/// A policy plus its batch and cached results.
///
/// # Example
/// ```
/// use u_procsched::models::ProcessRecord;
/// use u_procsched::scheduler::{Engine, Fcfs, Scheduler};
///
/// let mut engine = Engine::new(Fcfs::new());
/// engine.add(ProcessRecord::new("A", 0, 4));
/// engine.add(ProcessRecord::new("B", 1, 3));
///
/// let results = engine.results().unwrap();
/// assert_eq!(results[1].waiting, Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct Engine<P: Policy> {
    policy: P,
    processes: Vec<ProcessRecord>,
    timeline: Timeline,
    computed: bool,
}

impl<P: Policy> Engine<P> {
    /// Creates an engine with an empty batch.
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            processes: Vec::new(),
            timeline: Timeline::new(),
            computed: false,
        }
    }

    /// Adds every process from `processes`.
    pub fn with_processes(mut self, processes: impl IntoIterator<Item = ProcessRecord>) -> Self {
        for process in processes {
            Scheduler::add(&mut self, process);
        }
        self
    }

    /// The scheduling policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The batch in insertion order, as last simulated (or not yet simulated).
    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// Whether the cached results are current.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    fn ensure_computed(&mut self) -> Result<(), ScheduleError> {
        if self.computed {
            return Ok(());
        }

        let mut errors = validate_batch(&self.processes).err().unwrap_or_default();
        if let Err(policy_errors) = self.policy.validate(&self.processes) {
            errors.extend(policy_errors);
        }
        if !errors.is_empty() {
            return Err(ScheduleError::Validation(errors));
        }

        for process in &mut self.processes {
            process.reset();
        }
        debug!(
            policy = self.policy.name(),
            processes = self.processes.len(),
            "simulating batch"
        );
        self.timeline = self.policy.simulate(&mut self.processes);
        self.computed = true;
        Ok(())
    }
}

impl<P: Policy> Scheduler for Engine<P> {
    fn name(&self) -> &'static str {
        self.policy.name()
    }

    fn add(&mut self, process: ProcessRecord) {
        self.processes.push(process);
        self.computed = false;
    }

    fn results(&mut self) -> Result<&[ProcessRecord], ScheduleError> {
        self.ensure_computed()?;
        Ok(&self.processes)
    }

    fn timeline(&mut self) -> Result<&Timeline, ScheduleError> {
        self.ensure_computed()?;
        Ok(&self.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Fcfs, RoundRobin};
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_lazy_compute() {
        let mut engine = Engine::new(Fcfs::new());
        engine.add(ProcessRecord::new("A", 0, 2));
        assert!(!engine.is_computed());
        assert_eq!(engine.processes()[0].response, None);

        engine.results().unwrap();
        assert!(engine.is_computed());
        assert_eq!(engine.processes()[0].response, Some(2));
    }

    #[test]
    fn test_idempotent_reads() {
        let mut engine = Engine::new(RoundRobin::new(2, 1))
            .with_processes(vec![ProcessRecord::new("A", 0, 5), ProcessRecord::new("B", 1, 3)]);

        let first_results = engine.results().unwrap().to_vec();
        let first_timeline = engine.timeline().unwrap().clone();
        assert_eq!(engine.results().unwrap(), first_results.as_slice());
        assert_eq!(engine.timeline().unwrap(), &first_timeline);
    }

    #[test]
    fn test_add_invalidates_cache() {
        let mut engine = Engine::new(Fcfs::new());
        engine.add(ProcessRecord::new("A", 0, 4));
        assert_eq!(engine.timeline().unwrap().end_time(), Some(4));

        engine.add(ProcessRecord::new("B", 1, 3));
        assert!(!engine.is_computed());
        let results = engine.results().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].response, Some(6));
        assert_eq!(engine.timeline().unwrap().end_time(), Some(7));
    }

    #[test]
    fn test_empty_batch_is_error() {
        let mut engine = Engine::new(Fcfs::new());
        let err = engine.timeline().unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyBatch
        );
        assert!(!engine.is_computed());
    }

    #[test]
    fn test_invalid_burst_is_error() {
        let mut engine = Engine::new(Fcfs::new());
        engine.add(ProcessRecord::new("A", 0, 0));
        let err = engine.results().unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidBurst
        );
    }

    #[test]
    fn test_clock_overflow_is_error() {
        let mut engine = Engine::new(Fcfs::new());
        engine.add(ProcessRecord::new("A", 0, i64::MAX));
        engine.add(ProcessRecord::new("B", 0, 1));

        let err = engine.results().unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::TimeOverflow
        );
        assert!(!engine.is_computed());
    }

    #[test]
    fn test_round_robin_switch_overhead_overflow_is_error() {
        let mut engine = Engine::new(RoundRobin::new(1, 1));
        engine.add(ProcessRecord::new("A", 0, (1 << 52) + 1));

        let err = engine.timeline().unwrap_err();
        let kinds: Vec<_> = err.validation_errors().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(kinds, vec![ValidationErrorKind::TimeOverflow]);
    }

    #[test]
    fn test_batch_and_policy_errors_collected() {
        let mut engine = Engine::new(RoundRobin::new(-1, 0));
        let err = engine.results().unwrap_err();
        let kinds: Vec<_> = err.validation_errors().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![ValidationErrorKind::EmptyBatch, ValidationErrorKind::InvalidQuantum]
        );
    }

    #[test]
    fn test_name_delegates_to_policy() {
        let engine = Engine::new(Fcfs::new());
        assert_eq!(engine.name(), "FCFS");
        assert_eq!(engine.policy().name(), "FCFS");
    }
}
