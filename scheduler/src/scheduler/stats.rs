use super::{
    process::{Pid, ProcessOutcome, Ticks},
    timeline::Timeline,
    Algorithm,
};
use crate::error::SchedulerError;
use serde::Serialize;

/// Mean waiting, turnaround and response time over a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub waiting_time: f64,
    pub turnaround_time: f64,
    pub response_time: f64,
}

impl Averages {
    pub fn compute(outcomes: &[ProcessOutcome]) -> Result<Self, SchedulerError> {
        if outcomes.is_empty() {
            return Err(SchedulerError::EmptyInput);
        }

        Ok(Self {
            waiting_time: mean(outcomes, ProcessOutcome::waiting_time),
            turnaround_time: mean(outcomes, ProcessOutcome::turnaround_time),
            response_time: mean(outcomes, ProcessOutcome::response_time),
        })
    }
}

fn mean(outcomes: &[ProcessOutcome], field: fn(&ProcessOutcome) -> Ticks) -> f64 {
    // Summed as f64 so many long turnarounds cannot overflow
    outcomes.iter().map(|o| field(o) as f64).sum::<f64>() / outcomes.len() as f64
}

/// Everything one scheduling run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub algorithm: Algorithm,
    pub timeline: Timeline,
    pub processes: Vec<ProcessOutcome>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
}

impl SimulationResult {
    pub fn new(
        algorithm: Algorithm,
        timeline: Timeline,
        mut processes: Vec<ProcessOutcome>,
    ) -> Result<Self, SchedulerError> {
        let averages = Averages::compute(&processes)?;
        processes.sort_by_key(ProcessOutcome::pid);

        Ok(Self {
            algorithm,
            timeline,
            processes,
            average_waiting_time: averages.waiting_time,
            average_turnaround_time: averages.turnaround_time,
            average_response_time: averages.response_time,
        })
    }

    pub fn process(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.processes
            .binary_search_by_key(&pid, ProcessOutcome::pid)
            .ok()
            .map(|index| &self.processes[index])
    }

    /// Share of the makespan the CPU spent busy, in `[0, 1]`.
    pub fn cpu_utilization(&self) -> f64 {
        match self.timeline.makespan() {
            0 => 0.0,
            span => self.timeline.total_busy_time() as f64 / span as f64,
        }
    }

    pub fn throughput(&self) -> f64 {
        match self.timeline.makespan() {
            0 => 0.0,
            span => self.processes.len() as f64 / span as f64,
        }
    }
}
