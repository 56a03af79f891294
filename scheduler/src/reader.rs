/*!
 * Process Table Reader
 * Loads `| pid | arrival | burst | priority |` rows from a text file
 */

use crate::error::ReadError;
use crate::scheduler::Process;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, warn};

// Header row and the separator under it
const HEADER_LINES: usize = 2;
const MIN_FIELDS: usize = 5;

pub fn read_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let processes = parse_processes(BufReader::new(file)).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if processes.is_empty() {
        return Err(ReadError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), count = processes.len(), "Loaded process table");
    Ok(processes)
}

/// Parses every well-formed row. Short rows are skipped silently and rows
/// with non-numeric fields are skipped with a warning.
pub fn parse_processes(reader: impl BufRead) -> std::io::Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(HEADER_LINES) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }

        match parse_row(&fields[1..MIN_FIELDS]) {
            Some(process) => processes.push(process),
            None => warn!(line = index + 1, content = %line, "Error parsing line, skipping"),
        }
    }

    Ok(processes)
}

fn parse_row(fields: &[&str]) -> Option<Process> {
    let pid = fields[0].parse().ok()?;
    let arrival = fields[1].parse().ok()?;
    let burst = fields[2].parse().ok()?;
    let priority = fields[3].parse().ok()?;
    Some(Process::with_priority(pid, arrival, burst, priority))
}
