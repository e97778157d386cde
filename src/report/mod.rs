//! Result presentation.
//!
//! Turns a finished simulation into something a person or a renderer can
//! consume: a fixed-width text report and a normalized Gantt chart.
//!
//! # Report Contents
//!
//! | Section | Content |
//! |---------|---------|
//! | Table | Completion, waiting and turnaround time per process, by ID |
//! | Summary | Average waiting, average turnaround, total execution time |
//! | Chart | Text Gantt chart with explicit idle bars (optional) |

mod formatter;
mod gantt;

pub use formatter::{ReportOptions, ResultFormatter};
pub use gantt::{GanttBar, GanttChart, PALETTE_SIZE};
