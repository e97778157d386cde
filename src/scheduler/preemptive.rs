//! Preemptive priority scheduler.
//!
//! # Algorithm
//!
//! Discrete simulation in unit ticks. At every tick:
//!
//! 1. Admit processes whose `arrival` equals the tick.
//! 2. Pick the best ready process by dispatch order.
//! 3. If it differs from the current occupant, close the occupant's
//!    segment at this tick and open a new one.
//! 4. Run the pick for one tick; on completion close its segment at
//!    `tick + 1` and drop it from the ready queue.
//!
//! Ticks with an empty ready queue leave the CPU idle and emit nothing;
//! the clock skips them straight to the next arrival.
//! Consecutive ticks of one process merge into a single segment.
//!
//! # Complexity
//! O(T * n) where T = total busy ticks, n = processes.

use tracing::{debug, trace};

use super::{check_input, select_next, PriorityScheduler};
use crate::error::ScheduleError;
use crate::models::{Process, ProcessRecord, ScheduleResult, SchedulingMode, TimelineSegment};

/// Private simulation copy of a process.
#[derive(Debug, Clone, Copy)]
struct RunState {
    process: Process,
    remaining: i64,
}

/// The segment currently being extended.
#[derive(Debug, Clone, Copy)]
struct OpenSegment {
    process_id: u32,
    start: i64,
}

impl OpenSegment {
    fn close(self, end: i64) -> TimelineSegment {
        TimelineSegment::new(self.process_id, self.start, end)
    }
}

/// Tick-granular preemptive priority scheduler.
///
/// A process may be preempted and resumed, so it can own several segments.
///
/// # Example
///
/// ```
/// use u_priority::models::{Process, TimelineSegment};
/// use u_priority::scheduler::PreemptiveScheduler;
///
/// let processes = vec![Process::new(1, 0, 4, 2), Process::new(2, 1, 3, 1)];
/// let result = PreemptiveScheduler::new().run(&processes).unwrap();
///
/// assert_eq!(
///     result.segments,
///     vec![
///         TimelineSegment::new(1, 0, 1),
///         TimelineSegment::new(2, 1, 4),
///         TimelineSegment::new(1, 4, 7),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptiveScheduler;

impl PreemptiveScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Simulates preemptive priority scheduling.
    ///
    /// Works on private copies; `processes` is only read.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidInput`] if the process list fails
    /// validation. No partial simulation is attempted.
    pub fn run(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        check_input(SchedulingMode::Preemptive, processes)?;

        let mut states: Vec<RunState> = processes
            .iter()
            .map(|&process| RunState {
                process,
                remaining: process.burst,
            })
            .collect();

        // Indices into `states`
        let mut ready: Vec<usize> = Vec::with_capacity(states.len());
        let mut segments = Vec::new();
        let mut records = Vec::with_capacity(states.len());
        let mut open: Option<OpenSegment> = None;
        let mut time: i64 = 0;

        while records.len() < states.len() {
            if ready.is_empty() && open.is_none() {
                // Idle until the next arrival
                let next_arrival = states
                    .iter()
                    .map(|s| s.process.arrival)
                    .filter(|&arrival| arrival >= time)
                    .min();
                if let Some(next_arrival) = next_arrival {
                    if next_arrival > time {
                        trace!(from = time, to = next_arrival, "cpu idle");
                        time = next_arrival;
                    }
                }
            }

            for (idx, state) in states.iter().enumerate() {
                if state.process.arrival == time {
                    ready.push(idx);
                }
            }

            let pick = select_next(
                ready
                    .iter()
                    .enumerate()
                    .map(|(pos, &idx)| (pos, &states[idx].process)),
            );

            if let Some(pos) = pick {
                let idx = ready[pos];
                let id = states[idx].process.id;

                match open {
                    Some(current) if current.process_id != id => {
                        trace!(
                            preempted = current.process_id,
                            by = id,
                            at = time,
                            "preemption"
                        );
                        segments.push(current.close(time));
                        open = Some(OpenSegment {
                            process_id: id,
                            start: time,
                        });
                    }
                    Some(_) => {}
                    None => {
                        trace!(process = id, at = time, "dispatch");
                        open = Some(OpenSegment {
                            process_id: id,
                            start: time,
                        });
                    }
                }

                let state = &mut states[idx];
                state.remaining -= 1;

                if state.remaining == 0 {
                    let finish = time + 1;
                    if let Some(current) = open.take() {
                        segments.push(current.close(finish));
                    }
                    records.push(ProcessRecord::complete(&state.process, finish));
                    ready.swap_remove(pos);
                    trace!(process = id, finish, "complete");
                }
            }

            time += 1;
        }

        debug!(
            processes = records.len(),
            segments = segments.len(),
            span = time,
            "preemptive run complete"
        );

        Ok(ScheduleResult::new(
            SchedulingMode::Preemptive,
            segments,
            records,
        ))
    }
}

impl PriorityScheduler for PreemptiveScheduler {
    fn mode(&self) -> SchedulingMode {
        SchedulingMode::Preemptive
    }

    fn run(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        PreemptiveScheduler::run(self, processes)
    }
}
