//! Timeline (gantt sequence) model.
//!
//! A timeline is the ordered list of events describing CPU occupancy:
//! each event marks the instant a process starts (or resumes) running,
//! a Round Robin context-switch boundary, an idle gap, or the end of the run.
//!
//! Markers are variants rather than reserved process names, so a process
//! named `END` cannot be confused with the end of the run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens at a timeline event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineLabel {
    /// The named process takes the CPU.
    Process(String),
    /// A Round Robin slice ended; the context switch starts here.
    QuantumBoundary,
    /// No process is ready; the CPU idles until the next event.
    Idle,
    /// Final timestamp of the simulation.
    End,
}

impl TimelineLabel {
    /// Process name, if this label is a process segment.
    pub fn process_name(&self) -> Option<&str> {
        match self {
            Self::Process(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TimelineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(name) => f.write_str(name),
            Self::QuantumBoundary => f.write_str("QUANT"),
            Self::Idle => f.write_str("IDLE"),
            Self::End => f.write_str("END"),
        }
    }
}

/// A single `(timestamp, label)` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Event time.
    pub time: i64,
    /// Event label.
    pub label: TimelineLabel,
}

impl TimelineEvent {
    /// Creates a process-start event.
    pub fn process(time: i64, name: impl Into<String>) -> Self {
        Self {
            time,
            label: TimelineLabel::Process(name.into()),
        }
    }

    /// Creates a quantum-boundary event.
    pub fn quantum(time: i64) -> Self {
        Self {
            time,
            label: TimelineLabel::QuantumBoundary,
        }
    }

    /// Creates an idle event.
    pub fn idle(time: i64) -> Self {
        Self {
            time,
            label: TimelineLabel::Idle,
        }
    }

    /// Creates the end marker.
    pub fn end(time: i64) -> Self {
        Self {
            time,
            label: TimelineLabel::End,
        }
    }
}

/// Ordered sequence of timeline events.
///
/// Append-only while a policy simulates; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: TimelineEvent) {
        self.events.push(event);
    }

    /// Removes and returns the last event.
    pub fn pop(&mut self) -> Option<TimelineEvent> {
        self.events.pop()
    }

    /// All events in order.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Iterates over events.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEvent> {
        self.events.iter()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the timeline has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the first event.
    pub fn start_time(&self) -> Option<i64> {
        self.events.first().map(|e| e.time)
    }

    /// Timestamp of the `End` marker, if present.
    pub fn end_time(&self) -> Option<i64> {
        self.events
            .iter()
            .rev()
            .find(|e| e.label == TimelineLabel::End)
            .map(|e| e.time)
    }

    /// Whether timestamps never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.events.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Compact `(time, label)` pairs using the historical string markers.
    pub fn to_pairs(&self) -> Vec<(i64, String)> {
        self.events
            .iter()
            .map(|e| (e.time, e.label.to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEvent;
    type IntoIter = std::slice::Iter<'a, TimelineEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
