//! Text report formatting.

use serde::{Deserialize, Serialize};

use super::GanttChart;
use crate::models::{ProcessRecord, ScheduleResult, Summary, TimelineSegment};

const DEFAULT_TITLE: &str = "Priority Scheduling";
const RULE_WIDTH: usize = 68;
const ID_COLUMN: usize = 12;
const METRIC_COLUMN: usize = 18;
const SUMMARY_LABEL: usize = 50;

/// Report layout options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Heading line. `None` uses the scheduling mode's title.
    pub title: Option<String>,
    /// Decimal places for averages.
    pub precision: usize,
    /// Whether to append a text Gantt chart.
    pub include_gantt: bool,
    /// Characters per tick in the text Gantt chart.
    pub unit_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: None,
            precision: 2,
            include_gantt: true,
            unit_width: 3,
        }
    }
}

impl ReportOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the number of decimals for averages.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Enables or disables the Gantt chart section.
    pub fn with_gantt(mut self, include: bool) -> Self {
        self.include_gantt = include;
        self
    }

    /// Sets characters per tick in the chart.
    pub fn with_unit_width(mut self, unit_width: usize) -> Self {
        self.unit_width = unit_width;
        self
    }
}

/// Renders completed processes and their timeline as a text report.
///
/// # Example
///
/// ```
/// use u_priority::models::{Process, SchedulingMode};
/// use u_priority::report::{ReportOptions, ResultFormatter};
/// use u_priority::scheduler::simulate;
///
/// let result = simulate(SchedulingMode::Preemptive, &[Process::new(1, 0, 2, 1)]).unwrap();
/// let report = ResultFormatter::new()
///     .with_options(ReportOptions::new().with_gantt(false))
///     .format_result(&result);
///
/// assert!(report.starts_with("Preemptive Priority Scheduling"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultFormatter {
    options: ReportOptions,
}

impl ResultFormatter {
    /// Creates a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout options.
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Current layout options.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Formats a report and computes its summary.
    ///
    /// Rows are sorted by process ID regardless of input order.
    ///
    /// # Panics
    /// Panics if `completed` is empty: schedulers reject empty input, so
    /// reaching here with no records is a programming error.
    pub fn format(
        &self,
        completed: &[ProcessRecord],
        segments: &[TimelineSegment],
    ) -> (String, Summary) {
        let title = self.options.title.as_deref().unwrap_or(DEFAULT_TITLE);
        self.render(title, completed, segments)
    }

    /// Formats the report for a finished run, titled by its mode.
    pub fn format_result(&self, result: &ScheduleResult) -> String {
        let title = self
            .options
            .title
            .as_deref()
            .unwrap_or_else(|| result.mode.title());
        self.render(title, &result.records, &result.segments).0
    }

    fn render(
        &self,
        title: &str,
        completed: &[ProcessRecord],
        segments: &[TimelineSegment],
    ) -> (String, Summary) {
        let summary = Summary::from_records(completed);

        let mut rows: Vec<&ProcessRecord> = completed.iter().collect();
        rows.sort_by_key(|r| r.id);

        let rule = "-".repeat(RULE_WIDTH);
        let mut lines = vec![
            title.to_string(),
            String::new(),
            format!(
                "{:<id$}{:<metric$}{:<metric$}{}",
                "Process",
                "Completion Time",
                "Waiting Time",
                "Turnaround Time",
                id = ID_COLUMN,
                metric = METRIC_COLUMN,
            ),
            rule.clone(),
        ];

        for r in rows {
            lines.push(format!(
                "{:<id$}{:<metric$}{:<metric$}{}",
                r.label(),
                r.finish,
                r.waiting,
                r.turnaround,
                id = ID_COLUMN,
                metric = METRIC_COLUMN,
            ));
        }

        let precision = self.options.precision;
        lines.push(rule);
        lines.push(format!(
            "{:<width$}{:.precision$}",
            "Average Waiting Time:",
            summary.average_waiting,
            width = SUMMARY_LABEL,
        ));
        lines.push(format!(
            "{:<width$}{:.precision$}",
            "Average Turnaround Time:",
            summary.average_turnaround,
            width = SUMMARY_LABEL,
        ));
        lines.push(format!(
            "{:<width$}{}",
            "Total Execution Time:",
            summary.total_execution_time,
            width = SUMMARY_LABEL,
        ));

        if self.options.include_gantt {
            let chart = GanttChart::from_segments(segments);
            lines.push(String::new());
            lines.push("Gantt Chart".to_string());
            lines.push(chart.render_text(self.options.unit_width));
        }

        (lines.join("\n"), summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, SchedulingMode};
    use crate::scheduler::simulate;

    fn scenario_records() -> (Vec<ProcessRecord>, Vec<TimelineSegment>) {
        let p1 = Process::new(1, 0, 4, 2);
        let p2 = Process::new(2, 1, 3, 1);
        // Deliberately unsorted
        let records = vec![ProcessRecord::complete(&p2, 4), ProcessRecord::complete(&p1, 7)];
        let segments = vec![
            TimelineSegment::new(1, 0, 1),
            TimelineSegment::new(2, 1, 4),
            TimelineSegment::new(1, 4, 7),
        ];
        (records, segments)
    }

    #[test]
    fn test_format_layout() {
        let (records, segments) = scenario_records();
        let formatter = ResultFormatter::new().with_options(ReportOptions::new().with_gantt(false));
        let (report, summary) = formatter.format(&records, &segments);

        let expected = [
            "Priority Scheduling",
            "",
            "Process     Completion Time   Waiting Time      Turnaround Time",
            &"-".repeat(68),
            "P1          7                 3                 7",
            "P2          4                 0                 3",
            &"-".repeat(68),
            "Average Waiting Time:                             1.50",
            "Average Turnaround Time:                          5.00",
            "Total Execution Time:                             7",
        ]
        .join("\n");

        assert_eq!(report, expected);
        assert!((summary.average_waiting - 1.5).abs() < 1e-10);
        assert!((summary.average_turnaround - 5.0).abs() < 1e-10);
        assert_eq!(summary.total_execution_time, 7);
    }

    #[test]
    fn test_format_with_gantt() {
        let (records, segments) = scenario_records();
        let formatter =
            ResultFormatter::new().with_options(ReportOptions::new().with_unit_width(2));
        let (report, _) = formatter.format(&records, &segments);

        assert!(report.ends_with("Gantt Chart\n| P1 |  P2  |  P1  |\n0    1      4      7"));
    }

    #[test]
    fn test_format_result_uses_mode_title() {
        let processes = vec![Process::new(1, 0, 3, 2), Process::new(2, 3, 3, 1)];
        let result = simulate(SchedulingMode::NonPreemptive, &processes).unwrap();
        let report = ResultFormatter::new().format_result(&result);

        assert!(report.starts_with("Non-Preemptive Priority Scheduling\n\n"));
        assert!(report.contains("Average Waiting Time:                             0.00"));
    }

    #[test]
    fn test_custom_title_and_precision() {
        let (records, segments) = scenario_records();
        let options = ReportOptions::new()
            .with_title("Run #4")
            .with_precision(3)
            .with_gantt(false);
        let (report, _) = ResultFormatter::new()
            .with_options(options)
            .format(&records, &segments);

        assert!(report.starts_with("Run #4\n"));
        assert!(report.contains("1.500"));
        assert!(report.contains("5.000"));
    }

    #[test]
    #[should_panic(expected = "empty set of completed processes")]
    fn test_empty_completed_list_panics() {
        let _ = ResultFormatter::new().format(&[], &[]);
    }

    #[test]
    fn test_options_from_json() {
        let options: ReportOptions =
            serde_json::from_str(r#"{"include_gantt": false, "precision": 1}"#).unwrap();
        assert!(!options.include_gantt);
        assert_eq!(options.precision, 1);
        assert_eq!(options.unit_width, 3);
        assert!(options.title.is_none());
    }
}
