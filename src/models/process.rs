//! Process model.
//!
//! A process is the unit of work competing for the CPU. Its four input
//! fields never change during simulation; completion metrics are carried
//! by a separate [`ProcessRecord`] built once the process finishes.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation start (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Lower `priority` values take precedence over higher ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive).
    pub id: u32,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU ticks required.
    pub burst: i64,
    /// Scheduling rank (lower = more important).
    pub priority: i32,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: u32, arrival: i64, burst: i64, priority: i32) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst length.
    pub fn with_burst(mut self, burst: i64) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Display label used in reports and charts (`P<id>`).
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}

/// A completed process with its derived metrics.
///
/// [`ProcessRecord::complete`] derives both metrics from `finish`, so records
/// produced by the schedulers satisfy `turnaround = finish - arrival` and
/// `waiting = turnaround - burst`. Fields are public and deserializable;
/// records built by hand or loaded from JSON are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub id: u32,
    /// Arrival tick.
    pub arrival: i64,
    /// Burst length.
    pub burst: i64,
    /// Priority.
    pub priority: i32,
    /// Completion tick.
    pub finish: i64,
    /// Ticks spent ready but not running.
    pub waiting: i64,
    /// Ticks from arrival to completion.
    pub turnaround: i64,
}

impl ProcessRecord {
    /// Builds the record for `process` completing at `finish`.
    pub fn complete(process: &Process, finish: i64) -> Self {
        let turnaround = finish - process.arrival;
        Self {
            id: process.id,
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            finish,
            waiting: turnaround - process.burst,
            turnaround,
        }
    }

    /// The input process this record was derived from.
    pub fn process(&self) -> Process {
        Process::new(self.id, self.arrival, self.burst, self.priority)
    }

    /// Display label (`P<id>`).
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}
