use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use scheduling_simulator::{
    config::{prompt_algorithm, Config, USAGE},
    reader::read_processes,
    render::render_report,
    scheduler::{ProcessRunner, RunnerState},
    tracer::init_tracing,
    Algorithm,
};
use std::{error::Error, io};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = Config::from_env_and_args(std::env::args().skip(1))?;
    if config.help {
        println!("{USAGE}");
        return Ok(());
    }

    let processes = read_processes(&config.input)?;
    info!(input = %config.input.display(), count = processes.len(), "Process table loaded");

    if config.tui {
        let algorithm = config.selected_algorithm()?.unwrap_or(Algorithm::Fcfs);
        return run_tui(RunnerState::new(processes, algorithm)?);
    }

    let algorithm = match config.selected_algorithm()? {
        Some(algorithm) => algorithm,
        None => prompt_algorithm(io::stdin().lock(), io::stdout())?,
    };

    let result = algorithm.simulate(&processes)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }

    Ok(())
}

fn run_tui(state: RunnerState) -> Result<(), Box<dyn Error>> {
    execute!(io::stdout(), Clear(ClearType::All))?;

    let mut runner = ProcessRunner::new(state)?;
    while runner.run()? {}
    drop(runner);

    execute!(io::stdout(), Clear(ClearType::All))?;
    Ok(())
}
