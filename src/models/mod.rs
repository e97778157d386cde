//! Scheduling domain models.
//!
//! Provides the core data types for priority CPU scheduling: the input
//! process, its completed record, the timeline segment consumed by
//! renderers, and the result bundle returned by every scheduler.
//!
//! # Data Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | `Process` |
//! | Timeline | `TimelineSegment` |
//! | Completion | `ProcessRecord` |
//! | Output | `ScheduleResult` + `Summary` |

mod process;
mod schedule;
mod segment;

pub use process::{Process, ProcessRecord};
pub use schedule::{ScheduleResult, SchedulingMode, Summary};
pub use segment::TimelineSegment;
