mod display;
mod fcfs;
mod process;
mod round_robin;
mod runner;
mod sjf;
mod stats;
mod timeline;

use crate::error::{ConfigError, SchedulerError};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};
use tracing::info;

pub use display::DisplayTerminal;
pub use fcfs::FcfsScheduler;
pub use process::{Pid, Process, ProcessOutcome, Ticks};
pub use round_robin::RoundRobinScheduler;
pub use runner::{ProcessRunner, RunnerEvent, RunnerState};
pub use sjf::SjfScheduler;
pub use stats::{Averages, SimulationResult};
pub use timeline::{Interval, Timeline};

pub const DEFAULT_QUANTUM: u64 = 2;

/// A scheduling discipline run over an already validated process set.
pub trait Scheduler {
    const NAME: &'static str;

    fn schedule(&self, processes: &[Process]) -> (Timeline, Vec<ProcessOutcome>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "name")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    RoundRobin { quantum: u64 },
}

impl Algorithm {
    pub fn parse(name: &str, quantum: u64) -> Result<Self, ConfigError> {
        match name.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin { quantum }),
            _ => Err(ConfigError::UnknownAlgorithm(name.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => FcfsScheduler::NAME,
            Self::Sjf => SjfScheduler::NAME,
            Self::RoundRobin { .. } => RoundRobinScheduler::NAME,
        }
    }

    /// Validates the input, runs the chosen discipline on a private copy of
    /// it, and aggregates the outcome.
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SchedulerError> {
        validate(processes)?;

        let (timeline, outcomes) = match *self {
            Self::Fcfs => FcfsScheduler.schedule(processes),
            Self::Sjf => SjfScheduler.schedule(processes),
            Self::RoundRobin { quantum } => {
                RoundRobinScheduler::new(quantum)?.schedule(processes)
            }
        };

        let result = SimulationResult::new(*self, timeline, outcomes)?;
        info!(
            algorithm = %self,
            processes = result.processes.len(),
            intervals = result.timeline.len(),
            avg_waiting = result.average_waiting_time,
            avg_turnaround = result.average_turnaround_time,
            "Simulation finished"
        );
        Ok(result)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (quantum {quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Rejects input no discipline can run: empty sets, zero bursts, repeated
/// ids, and sets whose clock could run past `Ticks::MAX`.
pub fn validate(processes: &[Process]) -> Result<(), SchedulerError> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if process.burst_time() == 0 {
            return Err(SchedulerError::NonPositiveBurst { pid: process.pid() });
        }
        if !seen.insert(process.pid()) {
            return Err(SchedulerError::DuplicatePid { pid: process.pid() });
        }
    }

    // No clock value can exceed the last arrival plus all the work
    let horizon = processes
        .iter()
        .try_fold(0, |total: Ticks, process| total.checked_add(process.burst_time()))
        .and_then(|work| {
            processes
                .iter()
                .map(Process::arrival_time)
                .max()
                .and_then(|last| last.checked_add(work))
        });
    if horizon.is_none() {
        return Err(SchedulerError::ClockOverflow);
    }

    Ok(())
}
