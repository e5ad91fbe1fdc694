//! Line-based record files.
//!
//! # Formats
//!
//! Input, one process per line: `name arrival burst`
//!
//! Output, one process per line: `name response waiting`
//!
//! Tokens are whitespace-separated. Blank input lines are skipped; any
//! other line that does not hold exactly three tokens with integer
//! arrival and burst fails the whole load.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::ScheduleError;
use crate::models::ProcessRecord;

/// Parses process records from text.
pub fn parse_processes(text: &str) -> Result<Vec<ProcessRecord>, ScheduleError> {
    let mut processes = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 3 {
            return Err(ScheduleError::MalformedRecord {
                line: line_no,
                reason: format!("expected 3 fields, found {}", tokens.len()),
            });
        }

        let arrival = parse_field(tokens[1], "arrival", line_no)?;
        let burst = parse_field(tokens[2], "burst", line_no)?;
        processes.push(ProcessRecord::new(tokens[0], arrival, burst));
    }

    Ok(processes)
}

fn parse_field(token: &str, field: &str, line: usize) -> Result<i64, ScheduleError> {
    token
        .parse::<i64>()
        .map_err(|_| ScheduleError::MalformedRecord {
            line,
            reason: format!("{field} '{token}' is not an integer"),
        })
}

/// Reads process records from a file.
pub fn read_processes(path: impl AsRef<Path>) -> Result<Vec<ProcessRecord>, ScheduleError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ScheduleError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let processes = parse_processes(&text)?;
    info!(path = %path.display(), count = processes.len(), "loaded process records");
    Ok(processes)
}

/// Formats result rows, one per process, in the given order.
///
/// Unset metrics are written as `-`.
pub fn format_results(processes: &[ProcessRecord]) -> String {
    let mut out = String::new();
    for p in processes {
        let _ = writeln!(
            out,
            "{} {} {}",
            p.name,
            p.response.map_or_else(|| "-".to_string(), |v| v.to_string()),
            p.waiting.map_or_else(|| "-".to_string(), |v| v.to_string()),
        );
    }
    out
}

/// Writes result rows to a file, replacing it.
pub fn write_results(
    path: impl AsRef<Path>,
    processes: &[ProcessRecord],
) -> Result<(), ScheduleError> {
    let path = path.as_ref();
    fs::write(path, format_results(processes))?;
    info!(path = %path.display(), count = processes.len(), "wrote results");
    Ok(())
}
