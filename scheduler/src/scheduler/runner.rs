use super::{display::DisplayTerminal, Algorithm, Process, SimulationResult, DEFAULT_QUANTUM};
use crate::error::SchedulerError;
use std::{error::Error, io};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    Quit,
    SelectFcfs,
    SelectSjf,
    SelectRoundRobin,
    QuantumUp,
    QuantumDown,
    None,
}

/// The selection the interactive view is showing, and its latest result.
pub struct RunnerState {
    processes: Vec<Process>,
    algorithm: Algorithm,
    quantum: u64,
    result: SimulationResult,
}

impl RunnerState {
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Result<Self, SchedulerError> {
        let quantum = match algorithm {
            Algorithm::RoundRobin { quantum } => quantum,
            _ => DEFAULT_QUANTUM,
        };
        let result = algorithm.simulate(&processes)?;

        Ok(Self {
            processes,
            algorithm,
            quantum,
            result,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    // Returns false if the program should quit
    pub fn apply(&mut self, event: RunnerEvent) -> Result<bool, SchedulerError> {
        let next = match event {
            RunnerEvent::Quit => return Ok(false),
            RunnerEvent::None => return Ok(true),
            RunnerEvent::SelectFcfs => Algorithm::Fcfs,
            RunnerEvent::SelectSjf => Algorithm::Sjf,
            RunnerEvent::SelectRoundRobin => Algorithm::RoundRobin {
                quantum: self.quantum,
            },
            RunnerEvent::QuantumUp | RunnerEvent::QuantumDown => {
                self.quantum = if event == RunnerEvent::QuantumUp {
                    self.quantum.saturating_add(1)
                } else {
                    self.quantum.saturating_sub(1).max(1)
                };
                match self.algorithm {
                    Algorithm::RoundRobin { .. } => Algorithm::RoundRobin {
                        quantum: self.quantum,
                    },
                    other => other,
                }
            }
        };

        if next != self.algorithm {
            debug!(from = %self.algorithm, to = %next, "Switching algorithm");
            self.result = next.simulate(&self.processes)?;
            self.algorithm = next;
        }
        Ok(true)
    }
}

pub struct ProcessRunner {
    terminal: DisplayTerminal,
    state: RunnerState,
}

impl ProcessRunner {
    pub fn new(state: RunnerState) -> Result<Self, io::Error> {
        let terminal = DisplayTerminal::new()?;
        Ok(Self { terminal, state })
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> Result<bool, Box<dyn Error>> {
        self.terminal.draw(self.state.result())?;
        let event = self.terminal.get_input();
        Ok(self.state.apply(event)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> RunnerState {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        RunnerState::new(processes, Algorithm::Fcfs).unwrap()
    }

    #[test]
    fn test_switching_algorithms_reruns() {
        let mut state = state();
        assert!(state.apply(RunnerEvent::SelectSjf).unwrap());
        assert_eq!(state.algorithm(), Algorithm::Sjf);
        assert_eq!(state.result().algorithm, Algorithm::Sjf);

        assert!(state.apply(RunnerEvent::SelectRoundRobin).unwrap());
        assert_eq!(
            state.algorithm(),
            Algorithm::RoundRobin {
                quantum: DEFAULT_QUANTUM
            }
        );
    }

    #[test]
    fn test_quantum_never_drops_below_one() {
        let mut state = state();
        state.apply(RunnerEvent::SelectRoundRobin).unwrap();
        for _ in 0..5 {
            state.apply(RunnerEvent::QuantumDown).unwrap();
        }
        assert_eq!(state.algorithm(), Algorithm::RoundRobin { quantum: 1 });

        state.apply(RunnerEvent::QuantumUp).unwrap();
        assert_eq!(state.result().algorithm, Algorithm::RoundRobin { quantum: 2 });
    }

    #[test]
    fn test_quit() {
        assert!(!state().apply(RunnerEvent::Quit).unwrap());
    }
}
