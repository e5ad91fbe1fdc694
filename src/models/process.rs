//! Process record model.
//!
//! A process record is the unit of work fed to a scheduling policy:
//! an immutable description (name, arrival, burst) plus the two metrics
//! the simulation fills in (response and waiting time).
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Lifecycle state of a process during a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Not on the CPU (not yet arrived, or waiting in a ready queue).
    #[default]
    Idle,
    /// Currently holding the CPU.
    Running,
    /// Completed; `response` and `waiting` are set.
    Finished,
}

/// A process to be scheduled.
///
/// `response` and `waiting` are `None` until a policy engine has simulated
/// the batch the record belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier (assumed unique within a batch).
    pub name: String,
    /// Time the process becomes ready.
    pub arrival: i64,
    /// Total CPU time required. Must be positive.
    pub burst: i64,
    /// Completion time minus arrival.
    pub response: Option<i64>,
    /// Response minus burst.
    pub waiting: Option<i64>,
    /// Lifecycle state.
    #[serde(default)]
    pub state: ProcessState,
}

impl ProcessRecord {
    /// Creates a new, unscheduled process record.
    pub fn new(name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            response: None,
            waiting: None,
            state: ProcessState::Idle,
        }
    }

    /// Records completion at `completion_time`.
    ///
    /// Sets `response = completion - arrival` and `waiting = response - burst`.
    pub fn complete_at(&mut self, completion_time: i64) {
        let response = completion_time - self.arrival;
        self.response = Some(response);
        self.waiting = Some(response - self.burst);
        self.state = ProcessState::Finished;
    }

    /// Clears simulation output so the record can be scheduled again.
    pub fn reset(&mut self) {
        self.response = None;
        self.waiting = None;
        self.state = ProcessState::Idle;
    }

    /// Whether the simulation has completed this process.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == ProcessState::Finished
    }

    /// Completion time, if finished.
    pub fn completion_time(&self) -> Option<i64> {
        self.response.map(|r| self.arrival + r)
    }
}
