use super::process::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// One uninterrupted stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub pid: Pid,
    pub start: Ticks,
    pub end: Ticks,
}

impl Interval {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Execution intervals in the order they were dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        debug_assert!(end > start, "Interval for P{pid} must not be empty");
        debug_assert!(
            self.intervals.last().map_or(true, |last| last.end <= start),
            "Interval for P{pid} overlaps the previous one"
        );
        self.intervals.push(Interval { pid, start, end });
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The labels printed under a Gantt chart: the first start, then every end.
    pub fn boundaries(&self) -> Vec<Ticks> {
        let Some(first) = self.intervals.first() else {
            return Vec::new();
        };

        std::iter::once(first.start)
            .chain(self.intervals.iter().map(|interval| interval.end))
            .collect()
    }

    pub fn busy_time(&self, pid: Pid) -> Ticks {
        self.slices(pid).map(Interval::duration).sum()
    }

    pub fn slices(&self, pid: Pid) -> impl Iterator<Item = &Interval> {
        self.intervals
            .iter()
            .filter(move |interval| interval.pid == pid)
    }

    pub fn first_start(&self, pid: Pid) -> Option<Ticks> {
        self.slices(pid).next().map(|interval| interval.start)
    }

    pub fn makespan(&self) -> Ticks {
        match (self.intervals.first(), self.intervals.last()) {
            (Some(first), Some(last)) => last.end - first.start,
            _ => 0,
        }
    }

    pub fn total_busy_time(&self) -> Ticks {
        self.intervals.iter().map(Interval::duration).sum()
    }

    // Gaps between consecutive intervals
    pub fn idle_time(&self) -> Ticks {
        self.intervals
            .windows(2)
            .map(|pair| pair[1].start.saturating_sub(pair[0].end))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timeline {
        let mut timeline = Timeline::new();
        timeline.push(1, 0, 2);
        timeline.push(2, 2, 4);
        timeline.push(1, 6, 9);
        timeline
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(sample().boundaries(), vec![0, 2, 4, 9]);
        assert!(Timeline::new().boundaries().is_empty());
    }

    #[test]
    fn test_busy_and_idle_time() {
        let timeline = sample();
        assert_eq!(timeline.busy_time(1), 5);
        assert_eq!(timeline.busy_time(2), 2);
        assert_eq!(timeline.busy_time(3), 0);
        assert_eq!(timeline.slices(1).count(), 2);
        assert_eq!(timeline.first_start(1), Some(0));
        assert_eq!(timeline.makespan(), 9);
        assert_eq!(timeline.idle_time(), 2);
        assert_eq!(timeline.total_busy_time(), 7);
    }
}
