//! Process scheduling policies, the cached engine, and summary metrics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Ready-queue order |
//! |--------|-----------|-------------------|
//! | [`Fcfs`] | no | arrival |
//! | [`RoundRobin`] | yes (quantum) | arrival, then rotation |
//! | [`ShortestProcessNext`] | no | burst ascending |
//! | [`ShortestRemainingTime`] | yes (on arrival) | remaining ascending |
//! | [`HighestResponseRatioNext`] | no | response ratio descending |
//!
//! Every ready-queue tie is broken first-in, first-out.
//!
//! # Contract
//!
//! Callers build one [`Engine`], `add` every process, then read `results`
//! and/or `timeline`. Reads are idempotent until the next `add`.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod backlog;
mod config;
mod engine;
mod fcfs;
mod hrrn;
mod kpi;
mod round_robin;
mod spn;
mod srt;

pub use config::{IdlePolicy, SchedulerConfig, DEFAULT_CHANGE_TIME, DEFAULT_QUANTUM};
pub use engine::Engine;
pub use fcfs::Fcfs;
pub use hrrn::HighestResponseRatioNext;
pub use kpi::SimulationKpi;
pub use round_robin::RoundRobin;
pub use spn::ShortestProcessNext;
pub use srt::ShortestRemainingTime;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::ScheduleError;
use crate::models::{ProcessRecord, Timeline};
use crate::validation::ValidationResult;

/// A scheduling discipline.
///
/// `simulate` receives a validated, non-empty batch whose output fields are
/// cleared, fills in `response`/`waiting` for every process, and returns
/// the timeline. It must not reorder `processes`.
pub trait Policy: Debug {
    /// Short policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Checks policy parameters against `processes` before a run.
    fn validate(&self, _processes: &[ProcessRecord]) -> ValidationResult {
        Ok(())
    }

    /// Runs the simulation over `processes`.
    fn simulate(&self, processes: &mut [ProcessRecord]) -> Timeline;
}

/// The front-end contract: feed records, read results.
pub trait Scheduler: Debug {
    /// Policy name.
    fn name(&self) -> &'static str;

    /// Adds a process and invalidates any cached results.
    fn add(&mut self, process: ProcessRecord);

    /// Processes (insertion order) with `response` and `waiting` set.
    fn results(&mut self) -> Result<&[ProcessRecord], ScheduleError>;

    /// CPU occupancy timeline.
    fn timeline(&mut self) -> Result<&Timeline, ScheduleError>;
}

/// FCFS engine.
pub type FcfsScheduler = Engine<Fcfs>;
/// Round Robin engine.
pub type RoundRobinScheduler = Engine<RoundRobin>;
/// SPN engine.
pub type SpnScheduler = Engine<ShortestProcessNext>;
/// SRT engine.
pub type SrtScheduler = Engine<ShortestRemainingTime>;
/// HRRN engine.
pub type HrrnScheduler = Engine<HighestResponseRatioNext>;

/// Selects a policy by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Round Robin.
    Rr,
    /// Shortest Process Next.
    Spn,
    /// Shortest Remaining Time.
    Srt,
    /// Highest Response Ratio Next.
    Hrrn,
}

impl PolicyKind {
    /// Every policy, in presentation order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::Rr,
        PolicyKind::Spn,
        PolicyKind::Srt,
        PolicyKind::Hrrn,
    ];

    /// Lowercase identifier used on the command line and in preferences.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Rr => "rr",
            Self::Spn => "spn",
            Self::Srt => "srt",
            Self::Hrrn => "hrrn",
        }
    }

    /// Human-readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::Rr => "Round Robin",
            Self::Spn => "Shortest Process Next",
            Self::Srt => "Shortest Remaining Time",
            Self::Hrrn => "Highest Response Ratio Next",
        }
    }

    /// Builds an empty engine for this policy.
    pub fn build(&self, config: &SchedulerConfig) -> Box<dyn Scheduler> {
        match self {
            Self::Fcfs => Box::new(Engine::new(Fcfs::new().with_idle_policy(config.idle))),
            Self::Rr => Box::new(Engine::new(RoundRobin::new(
                config.quantum,
                config.change_time,
            ))),
            Self::Spn => Box::new(Engine::new(ShortestProcessNext)),
            Self::Srt => Box::new(Engine::new(ShortestRemainingTime)),
            Self::Hrrn => Box::new(Engine::new(HighestResponseRatioNext)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "rr" | "round-robin" | "roundrobin" => Ok(Self::Rr),
            "spn" | "sjf" => Ok(Self::Spn),
            "srt" | "srtf" => Ok(Self::Srt),
            "hrrn" => Ok(Self::Hrrn),
            _ => Err(format!(
                "unknown policy '{s}' (expected one of: fcfs, rr, spn, srt, hrrn)"
            )),
        }
    }
}
