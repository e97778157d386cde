//! Timeline segment model.

use serde::{Deserialize, Serialize};

/// A contiguous `[start, end)` interval of CPU occupancy by one process.
///
/// Segments are the unit consumed by chart renderers. A process preempted
/// and later resumed owns several disjoint segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Occupying process.
    pub process_id: u32,
    /// First tick of the run (inclusive).
    pub start: i64,
    /// Tick at which the run stops (exclusive).
    pub end: i64,
}

impl TimelineSegment {
    /// Creates a new segment.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the run in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `tick` falls inside this segment.
    #[inline]
    pub fn contains(&self, tick: i64) -> bool {
        self.start <= tick && tick < self.end
    }
}
