use super::{Process, ProcessOutcome, Scheduler, Timeline};
use tracing::debug;

/// Runs processes to completion in order of arrival.
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "First Come First Served";

    fn schedule(&self, processes: &[Process]) -> (Timeline, Vec<ProcessOutcome>) {
        // Stable, so simultaneous arrivals keep their input order
        let mut queue = processes.to_vec();
        queue.sort_by_key(Process::arrival_time);

        let mut timeline = Timeline::new();
        let mut outcomes = Vec::with_capacity(queue.len());
        let mut current_time = queue.first().map_or(0, Process::arrival_time);

        for process in queue {
            // Idle until the next arrival
            current_time = current_time.max(process.arrival_time());

            let start = current_time;
            let end = start + process.burst_time();
            debug!(pid = process.pid(), start, end, "FCFS dispatch");

            timeline.push(process.pid(), start, end);
            outcomes.push(ProcessOutcome::complete(process, start, end));
            current_time = end;
        }

        (timeline, outcomes)
    }
}
