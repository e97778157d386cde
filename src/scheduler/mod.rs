//! Priority schedulers.
//!
//! Provides the two priority disciplines and a mode-driven entry point.
//!
//! # Algorithms
//!
//! - `NonPreemptiveScheduler`: the best available process runs to
//!   completion; one segment per process.
//! - `PreemptiveScheduler`: unit-tick simulation where a strictly better
//!   arrival takes the CPU on its arrival tick.
//!
//! Both select through the same dispatch order (priority, arrival, ID).
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod dispatch;
mod non_preemptive;
mod preemptive;

pub use dispatch::{dispatch_order, select_next};
pub use non_preemptive::NonPreemptiveScheduler;
pub use preemptive::PreemptiveScheduler;

use std::fmt::Debug;

use tracing::{debug, warn};

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult, SchedulingMode};
use crate::validation::{priority_conflicts, validate_processes};

/// A priority scheduling discipline.
///
/// Implementations are stateless: every call to [`run`](Self::run) is a pure
/// function of its input, so one scheduler may serve many threads.
pub trait PriorityScheduler: Send + Sync + Debug {
    /// Discipline implemented by this scheduler.
    fn mode(&self) -> SchedulingMode;

    /// Validates `processes` and simulates them.
    fn run(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError>;
}

/// Returns the scheduler for a mode.
pub fn scheduler_for(mode: SchedulingMode) -> Box<dyn PriorityScheduler> {
    match mode {
        SchedulingMode::Preemptive => Box::new(PreemptiveScheduler::new()),
        SchedulingMode::NonPreemptive => Box::new(NonPreemptiveScheduler::new()),
    }
}

/// Simulates `processes` under the given mode.
///
/// # Example
///
/// ```
/// use u_priority::models::{Process, SchedulingMode};
/// use u_priority::scheduler::simulate;
///
/// let processes = vec![Process::new(1, 0, 2, 1), Process::new(2, 0, 3, 1)];
/// let result = simulate(SchedulingMode::NonPreemptive, &processes).unwrap();
/// assert_eq!(result.segments[0].process_id, 1);
/// ```
pub fn simulate(
    mode: SchedulingMode,
    processes: &[Process],
) -> Result<ScheduleResult, ScheduleError> {
    match mode {
        SchedulingMode::Preemptive => PreemptiveScheduler::new().run(processes),
        SchedulingMode::NonPreemptive => NonPreemptiveScheduler::new().run(processes),
    }
}

/// Validates input before a run and logs what the run will see.
fn check_input(mode: SchedulingMode, processes: &[Process]) -> Result<(), ScheduleError> {
    if let Err(errors) = validate_processes(processes) {
        warn!(%mode, errors = errors.len(), "rejecting process list");
        return Err(ScheduleError::InvalidInput(errors));
    }

    for (priority, ids) in priority_conflicts(processes) {
        debug!(priority, ?ids, "shared priority, resolved by arrival then id");
    }

    debug!(%mode, processes = processes.len(), "starting simulation");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRecord;
    use crate::workload::{generate, WorkloadConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const MODES: [SchedulingMode; 2] = [SchedulingMode::NonPreemptive, SchedulingMode::Preemptive];

    fn assert_record_invariants(r: &ProcessRecord) {
        assert_eq!(r.turnaround, r.finish - r.arrival);
        assert_eq!(r.waiting, r.turnaround - r.burst);
        assert!(r.waiting >= 0, "P{} waited {}", r.id, r.waiting);
    }

    fn assert_schedule_invariants(processes: &[Process], result: &ScheduleResult) {
        // Chronological, non-overlapping, well-formed
        for s in &result.segments {
            assert!(s.start >= 0 && s.start < s.end);
        }
        for w in result.segments.windows(2) {
            assert!(w[0].end <= w[1].start);
        }

        // CPU time conserved overall and per process
        let busy: i64 = result.segments.iter().map(|s| s.duration()).sum();
        let work: i64 = processes.iter().map(|p| p.burst).sum();
        assert_eq!(busy, work);

        assert_eq!(result.records.len(), processes.len());
        for p in processes {
            assert_eq!(result.cpu_time(p.id), p.burst);
            let segs = result.segments_for_process(p.id);
            assert!(segs[0].start >= p.arrival);
            let record = result.record(p.id).unwrap();
            assert_eq!(record.finish, segs[segs.len() - 1].end);
            assert_record_invariants(record);
        }

        assert_eq!(result.summary.total_execution_time, result.makespan());
    }

    #[test]
    fn test_invariants_on_generated_workloads() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = WorkloadConfig::default();

        for _ in 0..50 {
            let processes = generate(&config, &mut rng).unwrap();
            for mode in MODES {
                let result = simulate(mode, &processes).unwrap();
                assert_eq!(result.mode, mode);
                assert_schedule_invariants(&processes, &result);
            }

            let np = simulate(SchedulingMode::NonPreemptive, &processes).unwrap();
            assert_eq!(np.segment_count(), processes.len());
            for p in &processes {
                let seg = np.segments_for_process(p.id)[0];
                assert_eq!(seg.end, seg.start + p.burst);
            }
        }
    }

    #[test]
    fn test_preemptive_never_runs_worse_while_better_ready() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = WorkloadConfig::default();

        for _ in 0..30 {
            let processes = generate(&config, &mut rng).unwrap();
            let result = simulate(SchedulingMode::Preemptive, &processes).unwrap();

            for s in &result.segments {
                let running = processes.iter().find(|p| p.id == s.process_id).unwrap();
                for tick in s.start..s.end {
                    // Anyone strictly better that had arrived must already be done
                    for other in &processes {
                        if other.priority < running.priority && other.arrival <= tick {
                            let done = result.record(other.id).unwrap().finish;
                            assert!(done <= tick, "P{} ran at {tick} while P{} was ready", running.id, other.id);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_idempotent_runs() {
        let processes = vec![
            Process::new(3, 0, 4, 2),
            Process::new(1, 1, 2, 1),
            Process::new(2, 1, 5, 2),
            Process::new(4, 9, 1, 1),
        ];
        for mode in MODES {
            let a = simulate(mode, &processes).unwrap();
            let b = simulate(mode, &processes).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_strict_arrival_preempts_immediately() {
        let processes = vec![Process::new(1, 0, 6, 4), Process::new(2, 3, 2, 1)];
        let result = simulate(SchedulingMode::Preemptive, &processes).unwrap();

        let p2 = result.segments_for_process(2);
        assert_eq!(p2[0].start, 3);
        assert_eq!(result.segments_for_process(1)[0].end, 3);
    }

    #[test]
    fn test_scheduler_for_mode() {
        for mode in MODES {
            let scheduler = scheduler_for(mode);
            assert_eq!(scheduler.mode(), mode);
            let result = scheduler.run(&[Process::new(1, 0, 1, 1)]).unwrap();
            assert_eq!(result.mode, mode);
        }
    }

    #[test]
    fn test_parallel_runs() {
        let processes = vec![
            Process::new(1, 0, 4, 2),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 2, 3),
        ];
        let expected = simulate(SchedulingMode::Preemptive, &processes).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let input = processes.clone();
                    scope.spawn(move || simulate(SchedulingMode::Preemptive, &input).unwrap())
                })
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_overflowing_timeline_rejected() {
        use crate::validation::ValidationErrorKind;

        for mode in MODES {
            let err = simulate(mode, &[Process::new(1, i64::MAX - 1, 5, 1)]).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow
            );
        }
    }

    #[test]
    fn test_timeline_ending_at_max_tick() {
        let processes = vec![Process::new(1, i64::MAX - 5, 5, 1)];
        for mode in MODES {
            let result = simulate(mode, &processes).unwrap();
            assert_eq!(result.record(1).unwrap().finish, i64::MAX);
            assert_eq!(result.segments[0].start, i64::MAX - 5);
        }
    }

    #[test]
    fn test_invalid_input_not_simulated() {
        for mode in MODES {
            let err = simulate(mode, &[]).unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidInput(_)));
        }
    }
}
