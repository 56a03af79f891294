use super::{runner::RunnerEvent, SimulationResult};
use crate::render::render_gantt;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

const TICK_RATE: Duration = Duration::from_millis(200);

const HELP: &str = "[1] FCFS  [2] SJF  [3] Round Robin  [+/-] quantum  [q] quit";

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new() -> Result<Self, io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    // Nothing may write to the terminal while it is in raw mode
                    Err(_) => break,
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, input_rx })
    }

    pub fn draw(&mut self, result: &SimulationResult) -> Result<(), io::Error> {
        let gantt = render_gantt(&result.timeline);

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Length(5),
                    Constraint::Min(5),
                ])
                .split(f.size());

            let summary = Paragraph::new(format!(
                "Avg waiting: {:.2} | Avg turnaround: {:.2} | CPU: {:.0}%\n{}",
                result.average_waiting_time,
                result.average_turnaround_time,
                result.cpu_utilization() * 100.0,
                HELP
            ))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::LightBlue),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(result.algorithm.to_string())
                    .border_type(BorderType::Rounded),
            );

            f.render_widget(summary, chunks[0]);

            let chart = Paragraph::new(gantt.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Gantt Chart"));

            f.render_widget(chart, chunks[1]);

            let rows = result.processes.iter().map(|outcome| {
                let process = outcome.process();
                Row::new(vec![
                    Cell::from(format!("P{}", process.pid()))
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from(process.arrival_time().to_string()),
                    Cell::from(process.burst_time().to_string()),
                    Cell::from(process.priority().to_string()),
                    Cell::from(outcome.completion_time().to_string()),
                    Cell::from(outcome.waiting_time().to_string()),
                    Cell::from(outcome.turnaround_time().to_string()),
                ])
            });

            let table = Table::new(rows)
                .header(
                    Row::new(vec![
                        "PID",
                        "Arrival",
                        "Burst",
                        "Priority",
                        "Completion",
                        "Waiting",
                        "Turnaround",
                    ])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&[
                    Constraint::Length(5),
                    Constraint::Length(8),
                    Constraint::Length(6),
                    Constraint::Length(9),
                    Constraint::Length(11),
                    Constraint::Length(8),
                    Constraint::Length(11),
                ])
                .block(Block::default().title("Processes").borders(Borders::ALL))
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);

            f.render_widget(table, chunks[2]);
        })?;

        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // A closed channel means the input thread is gone
        let Ok(event) = self.input_rx.recv() else {
            return RunnerEvent::Quit;
        };

        match event {
            DisplayEvent::Input(key) if !key.modifiers.contains(KeyModifiers::CONTROL) => match key.code {
                KeyCode::Char('q') => RunnerEvent::Quit,
                KeyCode::Char('1') => RunnerEvent::SelectFcfs,
                KeyCode::Char('2') => RunnerEvent::SelectSjf,
                KeyCode::Char('3') => RunnerEvent::SelectRoundRobin,
                KeyCode::Char('+') => RunnerEvent::QuantumUp,
                KeyCode::Char('-') => RunnerEvent::QuantumDown,
                _ => RunnerEvent::None,
            },
            _ => RunnerEvent::None,
        }
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        let _ = self.terminal.clear();
        let _ = crossterm::terminal::disable_raw_mode();
    }
}
