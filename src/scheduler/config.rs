//! Policy configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ScheduleError;

/// Default Round Robin time slice.
pub const DEFAULT_QUANTUM: i64 = 10;

/// Default Round Robin context-switch overhead.
pub const DEFAULT_CHANGE_TIME: i64 = 2;

/// What FCFS does when the next process has not arrived yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdlePolicy {
    /// Jump the clock to the next arrival and record an idle event.
    #[default]
    AdvanceClock,
    /// Never skip forward: a late process starts as soon as the previous
    /// one finishes, even before it has arrived. Matches historical output.
    Legacy,
}

/// Configuration shared by the policy engines.
///
/// Every field has a default, so a partial JSON document is valid.
///
/// # Example
/// ```
/// use u_procsched::scheduler::{IdlePolicy, SchedulerConfig};
///
/// let config = SchedulerConfig::default()
///     .with_quantum(4)
///     .with_change_time(1)
///     .with_idle_policy(IdlePolicy::Legacy);
/// assert_eq!(config.quantum, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Round Robin time slice.
    pub quantum: i64,
    /// Round Robin context-switch overhead, added after every slice.
    pub change_time: i64,
    /// FCFS idle-gap handling.
    pub idle: IdlePolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            change_time: DEFAULT_CHANGE_TIME,
            idle: IdlePolicy::default(),
        }
    }
}

impl SchedulerConfig {
    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the Round Robin context-switch overhead.
    pub fn with_change_time(mut self, change_time: i64) -> Self {
        self.change_time = change_time;
        self
    }

    /// Sets the FCFS idle-gap handling.
    pub fn with_idle_policy(mut self, idle: IdlePolicy) -> Self {
        self.idle = idle;
        self
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScheduleError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
