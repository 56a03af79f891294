/*!
 * Error Types
 * Failures surfaced by validation, input reading and configuration
 */

use crate::scheduler::Pid;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Reasons a process set is refused before any simulation starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Invalid input: the process set is empty")]
    EmptyInput,

    #[error("Invalid input: process P{pid} has a burst time of zero")]
    NonPositiveBurst { pid: Pid },

    #[error("Invalid input: process id P{pid} appears more than once")]
    DuplicatePid { pid: Pid },

    #[error("Invalid input: arrival and burst times overflow the simulation clock")]
    ClockOverflow,

    #[error("Invalid input: time quantum must be positive, got {quantum}")]
    InvalidQuantum { quantum: u64 },
}

/// Failures while loading the process table
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Error opening file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No processes read from {}. Check the input file.", path.display())]
    Empty { path: PathBuf },
}

/// Bad command-line arguments or menu answers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },

    #[error("Unknown algorithm '{0}'. Valid: fcfs, sjf, rr")]
    UnknownAlgorithm(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Time quantum must be a positive integer, got {0}")]
    InvalidQuantum(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SchedulerError::NonPositiveBurst { pid: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid input: process P4 has a burst time of zero"
        );

        let err = ReadError::Empty {
            path: PathBuf::from("processes.txt"),
        };
        assert!(err.to_string().contains("processes.txt"));
    }
}
