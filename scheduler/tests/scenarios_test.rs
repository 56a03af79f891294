/*!
 * Scheduling Scenario Tests
 * Known inputs with hand-checked timelines and averages
 */

use pretty_assertions::assert_eq;
use scheduling_simulator::{Algorithm, Process, SchedulerError, SimulationResult};

fn pids(result: &SimulationResult) -> Vec<u32> {
    result.timeline.intervals().iter().map(|i| i.pid).collect()
}

fn waiting_times(result: &SimulationResult) -> Vec<u64> {
    result.processes.iter().map(|p| p.waiting_time()).collect()
}

#[test]
fn test_fcfs_scenario() {
    let processes = [
        Process::new(1, 0, 5),
        Process::new(2, 1, 3),
        Process::new(3, 2, 8),
    ];
    let result = Algorithm::Fcfs.simulate(&processes).unwrap();

    assert_eq!(pids(&result), vec![1, 2, 3]);
    assert_eq!(waiting_times(&result), vec![0, 4, 6]);
    assert_eq!(format!("{:.2}", result.average_waiting_time), "3.33");
    assert_eq!(result.timeline.boundaries(), vec![0, 5, 8, 16]);
}

#[test]
fn test_sjf_scenario() {
    let processes = [
        Process::new(1, 0, 7),
        Process::new(2, 2, 4),
        Process::new(3, 4, 1),
        Process::new(4, 5, 4),
    ];
    let result = Algorithm::Sjf.simulate(&processes).unwrap();

    assert_eq!(pids(&result), vec![1, 3, 2, 4]);
    assert_eq!(result.timeline.boundaries(), vec![0, 7, 8, 12, 16]);
    assert_eq!(waiting_times(&result), vec![0, 6, 3, 7]);
}

#[test]
fn test_round_robin_scenario() {
    let processes = [
        Process::new(1, 0, 5),
        Process::new(2, 1, 3),
        Process::new(3, 2, 1),
    ];
    let result = Algorithm::RoundRobin { quantum: 2 }
        .simulate(&processes)
        .unwrap();

    assert_eq!(pids(&result), vec![1, 2, 3, 1, 2, 1]);
    assert_eq!(result.timeline.makespan(), 9);
    assert_eq!(result.timeline.idle_time(), 0);
    assert_eq!(result.timeline.total_busy_time(), 9);

    for outcome in &result.processes {
        assert_eq!(
            outcome.waiting_time(),
            outcome.turnaround_time() - outcome.process().burst_time()
        );
    }
    assert_eq!(waiting_times(&result), vec![4, 4, 2]);
}

#[test]
fn test_single_process_never_waits() {
    let processes = [Process::new(9, 3, 4)];
    for algorithm in [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin { quantum: 1 },
    ] {
        let result = algorithm.simulate(&processes).unwrap();
        assert_eq!(result.processes[0].waiting_time(), 0);
        assert_eq!(result.processes[0].completion_time(), 7);
    }
}

#[test]
fn test_invalid_input_refused() {
    assert_eq!(Algorithm::Fcfs.simulate(&[]), Err(SchedulerError::EmptyInput));
    assert_eq!(
        Algorithm::Sjf.simulate(&[Process::new(1, 0, 2), Process::new(2, 1, 0)]),
        Err(SchedulerError::NonPositiveBurst { pid: 2 })
    );
    assert_eq!(
        Algorithm::RoundRobin { quantum: 2 }
            .simulate(&[Process::new(3, 0, 2), Process::new(3, 1, 1)]),
        Err(SchedulerError::DuplicatePid { pid: 3 })
    );
}

#[test]
fn test_json_output_shape() {
    let result = Algorithm::RoundRobin { quantum: 3 }
        .simulate(&[Process::new(1, 0, 2)])
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["algorithm"]["name"], "round_robin");
    assert_eq!(json["algorithm"]["quantum"], 3);
    assert_eq!(json["timeline"]["intervals"][0]["end"], 2);
    assert_eq!(json["processes"][0]["turnaround_time"], 2);
}
