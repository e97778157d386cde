//! Normalized Gantt chart.
//!
//! Turns a segment list into a gap-free bar sequence over `[0, span)`,
//! with idle stretches as explicit bars, so a renderer can draw it without
//! reasoning about gaps. Also renders a plain-text chart:
//!
//! ```text
//! | idle |  P1  |  P2  |
//! 0      2      4      6
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::TimelineSegment;

/// Number of distinct process colors renderers cycle through.
pub const PALETTE_SIZE: usize = 8;

const IDLE_LABEL: &str = "idle";
const EMPTY_CHART: &str = "No schedule data available";

/// One bar of the chart: a process run or an idle stretch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBar {
    /// Occupying process, `None` when the CPU is idle.
    pub process_id: Option<u32>,
    /// First tick (inclusive).
    pub start: i64,
    /// Last tick (exclusive).
    pub end: i64,
}

impl GanttBar {
    /// Whether this bar is idle time.
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }

    /// Bar length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Text drawn inside the bar.
    pub fn label(&self) -> String {
        match self.process_id {
            Some(id) => format!("P{id}"),
            None => IDLE_LABEL.to_string(),
        }
    }

    /// Palette index for the bar's process; `None` for idle bars.
    pub fn color_slot(&self) -> Option<usize> {
        self.process_id.map(|id| id as usize % PALETTE_SIZE)
    }
}

/// Render-ready timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    /// Gap-free bars covering `[0, span)`.
    pub bars: Vec<GanttBar>,
    /// End of the last bar.
    pub span: i64,
}

impl GanttChart {
    /// Builds a chart from scheduler segments.
    pub fn from_segments(segments: &[TimelineSegment]) -> Self {
        let mut ordered = segments.to_vec();
        ordered.sort_by_key(|s| s.start);

        let mut bars = Vec::with_capacity(ordered.len() * 2);
        let mut cursor: i64 = 0;

        for s in &ordered {
            if s.start > cursor {
                bars.push(GanttBar {
                    process_id: None,
                    start: cursor,
                    end: s.start,
                });
            }
            bars.push(GanttBar {
                process_id: Some(s.process_id),
                start: s.start,
                end: s.end,
            });
            cursor = cursor.max(s.end);
        }

        Self { bars, span: cursor }
    }

    /// Whether the chart has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Axis ticks `0..=span`; empty for an empty chart.
    pub fn time_markers(&self) -> Vec<i64> {
        if self.is_empty() {
            return Vec::new();
        }
        (0..=self.span).collect()
    }

    /// Distinct process IDs in ascending order.
    pub fn legend(&self) -> Vec<u32> {
        self.bars
            .iter()
            .filter_map(|b| b.process_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Renders a two-line text chart: bars, then boundary ticks.
    ///
    /// Each tick gets `unit_width` characters; bars widen to fit labels.
    pub fn render_text(&self, unit_width: usize) -> String {
        if self.is_empty() {
            return EMPTY_CHART.to_string();
        }

        let unit_width = unit_width.max(1);
        let mut bar_line = String::new();
        let mut axis_line = String::new();

        for bar in &self.bars {
            let label = bar.label();
            let width = (bar.duration() as usize * unit_width).max(label.len() + 2);

            bar_line.push('|');
            bar_line.push_str(&format!("{label:^width$}"));
            axis_line.push_str(&format!("{:<pad$}", bar.start, pad = width + 1));
        }

        bar_line.push('|');
        axis_line.push_str(&self.span.to_string());

        format!("{bar_line}\n{axis_line}")
    }
}
