use super::{Process, ProcessOutcome, Scheduler, Ticks, Timeline};
use crate::error::SchedulerError;
use std::collections::VecDeque;
use tracing::debug;

/// Preemptive round robin with a fixed time quantum.
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Ticks) -> Result<Self, SchedulerError> {
        if quantum == 0 {
            return Err(SchedulerError::InvalidQuantum { quantum });
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

/// Bookkeeping for one round robin run. Processes are referenced by their
/// index into the input slice.
struct RunQueue<'a> {
    processes: &'a [Process],
    // Input indices sorted by arrival, consumed left to right
    arrivals: Vec<usize>,
    next_arrival: usize,
    ready: VecDeque<usize>,
    remaining: Vec<Ticks>,
    first_start: Vec<Option<Ticks>>,
}

impl<'a> RunQueue<'a> {
    fn new(processes: &'a [Process]) -> Self {
        let mut arrivals: Vec<usize> = (0..processes.len()).collect();
        arrivals.sort_by_key(|&index| processes[index].arrival_time());

        Self {
            processes,
            arrivals,
            next_arrival: 0,
            ready: VecDeque::with_capacity(processes.len()),
            remaining: processes.iter().map(Process::burst_time).collect(),
            first_start: vec![None; processes.len()],
        }
    }

    // Queue everything that has arrived by `now`, in arrival order
    fn admit(&mut self, now: Ticks) {
        while let Some(&index) = self.arrivals.get(self.next_arrival) {
            if !self.processes[index].has_arrived(now) {
                break;
            }
            debug_assert!(!self.ready.contains(&index));
            self.ready.push_back(index);
            self.next_arrival += 1;
        }
    }

    fn upcoming_arrival(&self) -> Option<Ticks> {
        self.arrivals
            .get(self.next_arrival)
            .map(|&index| self.processes[index].arrival_time())
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin";

    fn schedule(&self, processes: &[Process]) -> (Timeline, Vec<ProcessOutcome>) {
        let mut queue = RunQueue::new(processes);
        let mut timeline = Timeline::new();
        let mut outcomes = Vec::with_capacity(processes.len());
        let mut current_time = 0;

        while outcomes.len() < processes.len() {
            queue.admit(current_time);

            let Some(index) = queue.ready.pop_front() else {
                // CPU idle: jump straight to the next arrival
                match queue.upcoming_arrival() {
                    Some(arrival) => current_time = arrival,
                    None => break,
                }
                continue;
            };

            let process = processes[index];
            let exec = self.quantum.min(queue.remaining[index]);
            let start = current_time;
            debug!(pid = process.pid(), start, exec, "Round robin slice");

            timeline.push(process.pid(), start, start + exec);
            queue.first_start[index].get_or_insert(start);
            queue.remaining[index] -= exec;
            current_time += exec;

            // Arrivals during the slice go ahead of the preempted process
            queue.admit(current_time);

            if queue.remaining[index] > 0 {
                queue.ready.push_back(index);
            } else {
                let first_start = queue.first_start[index].unwrap_or(start);
                outcomes.push(ProcessOutcome::complete(process, first_start, current_time));
            }
        }

        (timeline, outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(timeline: &Timeline) -> Vec<u32> {
        timeline.intervals().iter().map(|i| i.pid).collect()
    }

    #[test]
    fn test_zero_quantum_rejected() {
        assert!(RoundRobinScheduler::new(0).is_err());
        assert_eq!(RoundRobinScheduler::new(3).map(|rr| rr.quantum()), Ok(3));
    }

    #[test]
    fn test_slices_rotate() {
        let processes = [
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let (timeline, outcomes) = RoundRobinScheduler::new(2)
            .unwrap()
            .schedule(&processes);

        assert_eq!(order(&timeline), vec![1, 2, 3, 1, 2, 1]);
        assert_eq!(timeline.boundaries(), vec![0, 2, 4, 5, 7, 8, 9]);

        let p1 = outcomes.iter().find(|o| o.pid() == 1).unwrap();
        assert_eq!(p1.completion_time(), 9);
        assert_eq!(p1.waiting_time(), 4);
    }

    #[test]
    fn test_arrival_at_slice_end_queued_before_preempted() {
        let processes = [Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let (timeline, _) = RoundRobinScheduler::new(2).unwrap().schedule(&processes);

        assert_eq!(order(&timeline), vec![1, 2, 1]);
    }

    #[test]
    fn test_simultaneous_arrivals_keep_input_order() {
        let processes = [
            Process::new(7, 0, 3),
            Process::new(3, 0, 3),
            Process::new(5, 0, 1),
        ];
        let (timeline, _) = RoundRobinScheduler::new(2).unwrap().schedule(&processes);

        assert_eq!(order(&timeline), vec![7, 3, 5, 7, 3]);
        assert_eq!(timeline.boundaries(), vec![0, 2, 4, 5, 6, 7]);
    }

    #[test]
    fn test_idle_jump() {
        let processes = [Process::new(1, 0, 1), Process::new(2, 5, 3)];
        let (timeline, outcomes) = RoundRobinScheduler::new(2).unwrap().schedule(&processes);

        assert_eq!(timeline.boundaries(), vec![0, 1, 7, 8]);
        assert_eq!(timeline.idle_time(), 4);
        let p2 = outcomes.iter().find(|o| o.pid() == 2).unwrap();
        assert_eq!(p2.start_time(), 5);
        assert_eq!(p2.waiting_time(), 0);
    }
}
