//! Non-preemptive priority scheduler.
//!
//! # Algorithm
//!
//! 1. Start the clock at t=0 with every process pending.
//! 2. Collect pending processes with `arrival <= t`.
//! 3. If none, jump the clock to the earliest pending arrival.
//! 4. Otherwise pick the best by dispatch order and run it to completion
//!    in a single segment `[t, t + burst)`.
//! 5. Repeat until nothing is pending.
//!
//! # Complexity
//! O(n²) for n processes.

use tracing::{debug, trace};

use super::{check_input, select_next, PriorityScheduler};
use crate::error::ScheduleError;
use crate::models::{Process, ProcessRecord, ScheduleResult, SchedulingMode, TimelineSegment};

/// Run-to-completion priority scheduler.
///
/// Produces exactly one segment per process.
///
/// # Example
///
/// ```
/// use u_priority::models::{Process, TimelineSegment};
/// use u_priority::scheduler::NonPreemptiveScheduler;
///
/// let processes = vec![Process::new(1, 0, 3, 2), Process::new(2, 3, 3, 1)];
/// let result = NonPreemptiveScheduler::new().run(&processes).unwrap();
///
/// assert_eq!(
///     result.segments,
///     vec![TimelineSegment::new(1, 0, 3), TimelineSegment::new(2, 3, 6)]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPreemptiveScheduler;

impl NonPreemptiveScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Simulates run-to-completion priority scheduling.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidInput`] if the process list fails
    /// validation. No partial simulation is attempted.
    pub fn run(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        check_input(SchedulingMode::NonPreemptive, processes)?;

        let mut pending: Vec<Process> = processes.to_vec();
        let mut segments = Vec::with_capacity(pending.len());
        let mut records = Vec::with_capacity(pending.len());
        let mut time: i64 = 0;

        while !pending.is_empty() {
            let available = pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.arrival <= time);

            let Some(idx) = select_next(available) else {
                // Idle until the next arrival
                if let Some(next_arrival) = pending.iter().map(|p| p.arrival).min() {
                    trace!(from = time, to = next_arrival, "cpu idle");
                    time = next_arrival;
                }
                continue;
            };

            let process = pending.swap_remove(idx);
            trace!(
                process = process.id,
                start = time,
                burst = process.burst,
                "dispatch"
            );

            segments.push(TimelineSegment::new(process.id, time, time + process.burst));
            time += process.burst;
            records.push(ProcessRecord::complete(&process, time));
        }

        debug!(
            processes = records.len(),
            segments = segments.len(),
            span = time,
            "non-preemptive run complete"
        );

        Ok(ScheduleResult::new(
            SchedulingMode::NonPreemptive,
            segments,
            records,
        ))
    }
}

impl PriorityScheduler for NonPreemptiveScheduler {
    fn mode(&self) -> SchedulingMode {
        SchedulingMode::NonPreemptive
    }

    fn run(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        NonPreemptiveScheduler::run(self, processes)
    }
}
