use serde::{Deserialize, Serialize};

pub type Pid = u32;
pub type Ticks = u64;

/// The fixed facts about a process, as read from the input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pid: Pid,
    arrival_time: Ticks,
    burst_time: Ticks,
    priority: i32,
}

impl Process {
    const DEFAULT_PRIORITY: i32 = 0;

    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Process::with_priority(pid, arrival_time, burst_time, Process::DEFAULT_PRIORITY)
    }

    pub fn with_priority(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: i32) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }
}

/// What a single run computed for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    process: Process,
    start_time: Ticks,
    completion_time: Ticks,
    waiting_time: Ticks,
    turnaround_time: Ticks,
}

impl ProcessOutcome {
    /// Records a finished process. `start_time` is its first dispatch.
    pub fn complete(process: Process, start_time: Ticks, completion_time: Ticks) -> Self {
        debug_assert!(start_time >= process.arrival_time());
        debug_assert!(completion_time >= start_time + process.burst_time());

        let turnaround_time = completion_time - process.arrival_time();
        Self {
            process,
            start_time,
            completion_time,
            waiting_time: turnaround_time - process.burst_time(),
            turnaround_time,
        }
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    pub fn pid(&self) -> Pid {
        self.process.pid()
    }

    pub fn start_time(&self) -> Ticks {
        self.start_time
    }

    pub fn completion_time(&self) -> Ticks {
        self.completion_time
    }

    pub fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }

    pub fn turnaround_time(&self) -> Ticks {
        self.turnaround_time
    }

    pub fn response_time(&self) -> Ticks {
        self.start_time - self.process.arrival_time()
    }
}
