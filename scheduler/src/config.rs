/*!
 * Configuration
 * Command-line flags with environment fallbacks, and the interactive menu
 */

use crate::error::ConfigError;
use crate::scheduler::{Algorithm, DEFAULT_QUANTUM};
use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
};

pub const DEFAULT_INPUT: &str = "processes.txt";

pub const USAGE: &str = "\
Usage: scheduling-simulator [OPTIONS]

Options:
  -i, --input <FILE>        Process table to read (env SCHED_INPUT, default processes.txt)
  -a, --algorithm <NAME>    fcfs, sjf or rr; prompts when omitted
  -q, --quantum <TICKS>     Round robin time quantum (env SCHED_QUANTUM, default 2)
      --json                Print the result as JSON
      --tui                 Open the interactive terminal view
  -h, --help                Print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub algorithm: Option<String>,
    pub quantum: u64,
    pub json: bool,
    pub tui: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            algorithm: None,
            quantum: DEFAULT_QUANTUM,
            json: false,
            tui: false,
            help: false,
        }
    }
}

impl Config {
    /// Reads `SCHED_INPUT` / `SCHED_QUANTUM`, then lets the arguments
    /// override them.
    pub fn from_env_and_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(input) = env::var("SCHED_INPUT") {
            config.input = PathBuf::from(input);
        }
        if let Ok(quantum) = env::var("SCHED_QUANTUM") {
            config.quantum = parse_quantum("SCHED_QUANTUM", &quantum)?;
        }

        config.apply_args(args)?;
        Ok(config)
    }

    pub fn apply_args(&mut self, args: impl IntoIterator<Item = String>) -> Result<(), ConfigError> {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-i" | "--input" => self.input = PathBuf::from(take_value(&mut args, &arg)?),
                "-a" | "--algorithm" => self.algorithm = Some(take_value(&mut args, &arg)?),
                "-q" | "--quantum" => {
                    self.quantum = parse_quantum(&arg, &take_value(&mut args, &arg)?)?
                }
                "--json" => self.json = true,
                "--tui" => self.tui = true,
                "-h" | "--help" => self.help = true,
                other => return Err(ConfigError::UnknownArgument(other.to_owned())),
            }
        }

        Ok(())
    }

    /// The algorithm named on the command line, if any.
    pub fn selected_algorithm(&self) -> Result<Option<Algorithm>, ConfigError> {
        self.algorithm
            .as_deref()
            .map(|name| Algorithm::parse(name, self.quantum))
            .transpose()
    }
}

fn take_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_owned()))
}

fn parse_quantum(flag: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidQuantum(value.to_owned())),
        Ok(quantum) => Ok(quantum),
        Err(_) => Err(ConfigError::InvalidNumber {
            flag: flag.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Asks for an algorithm (and a quantum for round robin) on `output`,
/// reading answers from `input`.
pub fn prompt_algorithm(
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<Algorithm, ConfigError> {
    let io_err = |err: io::Error| ConfigError::InvalidChoice(err.to_string());

    write!(
        output,
        "Select a scheduling algorithm:\n\n1. FCFS\n2. SJF\n3. Round Robin\n"
    )
    .map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let choice = read_answer(&mut input).map_err(io_err)?;
    match choice.as_str() {
        "1" => Ok(Algorithm::Fcfs),
        "2" => Ok(Algorithm::Sjf),
        "3" => {
            write!(output, "Enter time quantum: ").map_err(io_err)?;
            output.flush().map_err(io_err)?;

            let answer = read_answer(&mut input).map_err(io_err)?;
            match answer.parse::<u64>() {
                Ok(quantum) if quantum > 0 => Ok(Algorithm::RoundRobin { quantum }),
                _ => Err(ConfigError::InvalidQuantum(answer)),
            }
        }
        _ => Err(ConfigError::InvalidChoice(choice)),
    }
}

fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
