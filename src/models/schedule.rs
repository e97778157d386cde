//! Schedule result model.
//!
//! A schedule result is the complete output of one simulation run: the
//! timeline, the completed process records and their summary statistics.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ProcessRecord, TimelineSegment};
use crate::error::ScheduleError;

/// Which priority discipline produced a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingMode {
    /// A higher-priority arrival interrupts the running process.
    Preemptive,
    /// A selected process runs to completion.
    NonPreemptive,
}

impl SchedulingMode {
    /// Human-readable title used as the default report heading.
    pub fn title(&self) -> &'static str {
        match self {
            SchedulingMode::Preemptive => "Preemptive Priority Scheduling",
            SchedulingMode::NonPreemptive => "Non-Preemptive Priority Scheduling",
        }
    }

    /// Whether running processes may be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, SchedulingMode::Preemptive)
    }
}

impl fmt::Display for SchedulingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingMode::Preemptive => write!(f, "preemptive"),
            SchedulingMode::NonPreemptive => write!(f, "non-preemptive"),
        }
    }
}

impl FromStr for SchedulingMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preemptive" => Ok(SchedulingMode::Preemptive),
            "non-preemptive" | "nonpreemptive" | "non_preemptive" => {
                Ok(SchedulingMode::NonPreemptive)
            }
            other => Err(ScheduleError::UnknownMode(other.to_string())),
        }
    }
}

/// Aggregate statistics over completed processes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Latest finish tick.
    pub total_execution_time: i64,
}

impl Summary {
    /// Computes summary statistics.
    ///
    /// # Panics
    /// Panics if `records` is empty. Callers reject empty input before
    /// simulating, so an empty list here is a programming error.
    pub fn from_records(records: &[ProcessRecord]) -> Self {
        assert!(
            !records.is_empty(),
            "summary requested for an empty set of completed processes"
        );

        let count = records.len() as f64;
        let total_waiting: i64 = records.iter().map(|r| r.waiting).sum();
        let total_turnaround: i64 = records.iter().map(|r| r.turnaround).sum();
        let total_execution_time = records.iter().map(|r| r.finish).max().unwrap_or(0);

        Self {
            average_waiting: total_waiting as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            total_execution_time,
        }
    }
}

/// The outcome of one simulation run.
///
/// Records are kept sorted by process id; segments are chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Discipline that produced this schedule.
    pub mode: SchedulingMode,
    /// CPU occupancy intervals in chronological order.
    pub segments: Vec<TimelineSegment>,
    /// Completed processes, sorted by id.
    pub records: Vec<ProcessRecord>,
    /// Averages and total span.
    pub summary: Summary,
}

impl ScheduleResult {
    /// Assembles a result, sorting records by id and computing the summary.
    ///
    /// # Panics
    /// Panics if `records` is empty (see [`Summary::from_records`]).
    pub fn new(
        mode: SchedulingMode,
        segments: Vec<TimelineSegment>,
        mut records: Vec<ProcessRecord>,
    ) -> Self {
        records.sort_by_key(|r| r.id);
        let summary = Summary::from_records(&records);
        Self {
            mode,
            segments,
            records,
            summary,
        }
    }

    /// Latest segment end (ticks).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Finds the record for a process.
    pub fn record(&self, process_id: u32) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == process_id)
    }

    /// Returns all segments run by a process, in order.
    pub fn segments_for_process(&self, process_id: u32) -> Vec<&TimelineSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU ticks granted to a process.
    pub fn cpu_time(&self, process_id: u32) -> i64 {
        self.segments_for_process(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Ticks within `[0, makespan)` during which no process ran.
    pub fn idle_time(&self) -> i64 {
        let busy: i64 = self.segments.iter().map(|s| s.duration()).sum();
        self.makespan() - busy
    }

    /// Fraction of `[0, makespan)` the CPU was busy.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let span = self.makespan();
        if span <= 0 {
            return None;
        }
        Some((span - self.idle_time()) as f64 / span as f64)
    }

    /// Number of context switches into a different process.
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
