//! Offline CPU scheduling simulator.
//!
//! Runs first-come-first-served, shortest-job-first and round-robin over a
//! fixed set of processes, and reports the execution timeline together with
//! per-process waiting and turnaround times.

pub mod config;
pub mod error;
pub mod reader;
pub mod render;
pub mod scheduler;
pub mod tracer;

pub use error::{ConfigError, ReadError, SchedulerError};
pub use scheduler::{
    Algorithm, FcfsScheduler, Interval, Process, ProcessOutcome, RoundRobinScheduler, Scheduler,
    SimulationResult, SjfScheduler, Timeline,
};
