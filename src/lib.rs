//! Priority CPU scheduling simulator.
//!
//! Simulates preemptive and non-preemptive priority scheduling over a
//! finite set of processes and reports the resulting timeline and
//! completion metrics. Lower priority values take precedence; ties are
//! broken by earlier arrival, then by smaller process ID.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessRecord`,
//!   `TimelineSegment`, `ScheduleResult`, `Summary`, `SchedulingMode`
//! - **`validation`**: Input integrity checks (IDs, ranges, duplicates)
//! - **`scheduler`**: `NonPreemptiveScheduler`, `PreemptiveScheduler`, `simulate`
//! - **`report`**: `ResultFormatter` text reports and `GanttChart`
//! - **`workload`**: Random process lists for demos and tests
//!
//! # Example
//!
//! ```
//! use u_priority::models::{Process, SchedulingMode};
//! use u_priority::report::ResultFormatter;
//! use u_priority::scheduler::simulate;
//!
//! let processes = vec![Process::new(1, 0, 4, 2), Process::new(2, 1, 3, 1)];
//! let result = simulate(SchedulingMode::Preemptive, &processes).unwrap();
//!
//! assert_eq!(result.segment_count(), 3);
//! assert_eq!(result.summary.total_execution_time, 7);
//! println!("{}", ResultFormatter::new().format_result(&result));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
