//! Crate-wide error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while loading, validating, or simulating a process batch.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The process-record file does not exist.
    #[error("input file not found: {}", .path.display())]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// A record line could not be parsed.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The batch or configuration violates a simulation precondition.
    #[error("invalid simulation input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document (configuration or preference store) could not be
    /// encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScheduleError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_messages() {
        let err = ScheduleError::MalformedRecord {
            line: 3,
            reason: "expected 3 fields, found 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record on line 3: expected 3 fields, found 2"
        );

        let err = ScheduleError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_validation_errors_joined() {
        let err = ScheduleError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyBatch, "no processes"),
            ValidationError::new(ValidationErrorKind::InvalidBurst, "bad burst"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid simulation input: no processes; bad burst"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }
}
