use super::{Process, ProcessOutcome, Scheduler, Ticks, Timeline};
use tracing::debug;

/// Non-preemptive shortest job first.
pub struct SjfScheduler;

impl SjfScheduler {
    // Shortest burst among arrived, unfinished processes; ties go to the
    // earlier arrival, then the lower pid.
    fn pick_next(processes: &[Process], completed: &[bool], now: Ticks) -> Option<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|&(index, process)| !completed[index] && process.has_arrived(now))
            .min_by_key(|&(_, process)| {
                (process.burst_time(), process.arrival_time(), process.pid())
            })
            .map(|(index, _)| index)
    }

    fn next_arrival(processes: &[Process], completed: &[bool]) -> Option<Ticks> {
        processes
            .iter()
            .zip(completed)
            .filter(|&(_, &done)| !done)
            .map(|(process, _)| process.arrival_time())
            .min()
    }
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "Shortest Job First";

    fn schedule(&self, processes: &[Process]) -> (Timeline, Vec<ProcessOutcome>) {
        let mut completed = vec![false; processes.len()];
        let mut timeline = Timeline::new();
        let mut outcomes = Vec::with_capacity(processes.len());
        let mut current_time = 0;

        while outcomes.len() < processes.len() {
            let Some(index) = Self::pick_next(processes, &completed, current_time) else {
                // Nothing has arrived yet: jump the clock to the next arrival
                match Self::next_arrival(processes, &completed) {
                    Some(arrival) => current_time = arrival,
                    None => break,
                }
                continue;
            };

            let process = processes[index];
            let start = current_time;
            let end = start + process.burst_time();
            debug!(pid = process.pid(), start, end, "SJF dispatch");

            timeline.push(process.pid(), start, end);
            outcomes.push(ProcessOutcome::complete(process, start, end));
            completed[index] = true;
            current_time = end;
        }

        (timeline, outcomes)
    }
}
