/*!
 * Process Table Reader Tests
 */

use pretty_assertions::assert_eq;
use scheduling_simulator::{reader::read_processes, Algorithm, Process, ReadError};
use std::io::Write;
use tempfile::NamedTempFile;

fn table(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_reads_and_simulates_file() {
    let file = table(
        "| PID | Arrival | Burst | Priority |\n\
         |-----|---------|-------|----------|\n\
         | 1 | 0 | 7 | 3 |\n\
         | 2 | 2 | 4 | 1 |\n\
         | 3 | 4 | 1 | 2 |\n\
         | 4 | 5 | 4 | 1 |\n",
    );

    let processes = read_processes(file.path()).unwrap();
    assert_eq!(processes.len(), 4);
    assert_eq!(processes[0], Process::with_priority(1, 0, 7, 3));

    let result = Algorithm::Sjf.simulate(&processes).unwrap();
    assert_eq!(result.average_waiting_time, 4.0);
}

#[test]
fn test_missing_file() {
    let err = read_processes("/nonexistent/processes.txt").unwrap_err();
    assert!(matches!(err, ReadError::Io { .. }));
}

#[test]
fn test_file_without_rows() {
    let file = table("| PID | Arrival | Burst | Priority |\n|---|---|---|---|\n| bad | row |\n");
    let err = read_processes(file.path()).unwrap_err();
    assert!(matches!(err, ReadError::Empty { .. }));
}
