//! Input validation for process batches and policy configuration.
//!
//! Checks simulation preconditions before any policy runs. Detects:
//! - Empty batches
//! - Non-positive burst times
//! - Negative arrival times
//! - Invalid Round Robin quantum / context-switch overhead
//! - Batches whose simulated time would pass `MAX_SIMULATION_TIME`
//!
//! All problems are collected, not just the first one.

use crate::models::ProcessRecord;

/// Latest instant a simulation may reach.
///
/// Every integer up to 2^53 is exact as `f64`, so rule scores keep the
/// integer order of arrivals, bursts and remaining times.
pub const MAX_SIMULATION_TIME: i64 = 1 << 53;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No process records were added.
    EmptyBatch,
    /// A process requires zero or negative CPU time.
    InvalidBurst,
    /// A process arrives before the epoch.
    NegativeArrival,
    /// Round Robin quantum is not positive.
    InvalidQuantum,
    /// Round Robin context-switch overhead is negative.
    InvalidChangeTime,
    /// The batch would drive the clock past `MAX_SIMULATION_TIME`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. The batch is not empty
/// 2. Every burst is positive
/// 3. Every arrival is non-negative
/// 4. The latest arrival plus the total burst stays within
///    `MAX_SIMULATION_TIME`
///
/// Names are not checked for uniqueness.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Process batch is empty",
        ));
    }

    for p in processes {
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' has non-positive burst {}", p.name, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.name, p.arrival),
            ));
        }
    }

    if errors.is_empty() && !within_limit(time_horizon(processes, None)) {
        errors.push(horizon_error("Batch"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates Round Robin slice parameters.
pub fn validate_round_robin(quantum: i64, change_time: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ));
    }
    if change_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidChangeTime,
            format!("Context-switch time must be non-negative, got {change_time}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin run of `processes`: slice parameters first,
/// then the clock including `change_time` after every slice.
pub fn validate_round_robin_batch(
    processes: &[ProcessRecord],
    quantum: i64,
    change_time: i64,
) -> ValidationResult {
    validate_round_robin(quantum, change_time)?;

    // Already reported by `validate_batch`.
    if !within_limit(time_horizon(processes, None)) {
        return Ok(());
    }
    if within_limit(time_horizon(processes, Some((quantum, change_time)))) {
        Ok(())
    } else {
        Err(vec![horizon_error("Round Robin run with context switches")])
    }
}

/// Upper bound on the clock for `processes`: latest arrival plus total
/// burst, plus `change_time` per `quantum` slice when given.
///
/// Returns `None` if the bound does not fit in `i64`. Negative arrivals and
/// bursts count as zero.
pub fn time_horizon(processes: &[ProcessRecord], slicing: Option<(i64, i64)>) -> Option<i64> {
    let mut horizon = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);

    for p in processes {
        let burst = p.burst.max(0);
        horizon = horizon.checked_add(burst)?;
        if let Some((quantum, change_time)) = slicing {
            if quantum > 0 && change_time > 0 {
                let slices = burst / quantum + i64::from(burst % quantum != 0);
                horizon = horizon.checked_add(slices.checked_mul(change_time)?)?;
            }
        }
    }
    Some(horizon)
}

fn within_limit(horizon: Option<i64>) -> bool {
    horizon.is_some_and(|h| h <= MAX_SIMULATION_TIME)
}

fn horizon_error(subject: &str) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::TimeOverflow,
        format!("{subject} would run past time {MAX_SIMULATION_TIME}"),
    )
}
