//! Input validation for scheduling problems.
//!
//! Checks structural integrity of the process list before simulation.
//! Detects:
//! - Empty input
//! - Non-positive process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive priorities
//! - Duplicate IDs
//! - Timelines whose last possible tick overflows `i64`
//!
//! Shared priorities are not errors: both schedulers resolve them through
//! the dispatch order. [`priority_conflicts`] lists them for callers that
//! want to warn about them.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A process ID is zero.
    InvalidId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or negative time).
    NonPositiveBurst,
    /// A priority is zero or negative.
    NonPositivePriority,
    /// Two processes share the same ID.
    DuplicateId,
    /// The latest arrival plus all bursts does not fit in `i64` ticks.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process list for a simulation run.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is positive
/// 3. Every arrival is `>= 0`
/// 4. Every burst is `> 0`
/// 5. Every priority is `> 0`
/// 6. No duplicate IDs
/// 7. `max(arrival) + sum(burst)` fits in `i64`, which bounds every finish tick
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive, got 0",
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst),
            ));
        }

        if p.priority <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositivePriority,
                format!("Process {} has non-positive priority {}", p.id, p.priority),
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival {latest_arrival} plus total burst time exceeds {} ticks",
                i64::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Lists priority levels shared by more than one process.
///
/// Returns `(priority, ids)` pairs in ascending priority order, with IDs in
/// input order. An empty vector means every priority is distinct.
pub fn priority_conflicts(processes: &[Process]) -> Vec<(i32, Vec<u32>)> {
    let mut by_priority: BTreeMap<i32, Vec<u32>> = BTreeMap::new();
    for p in processes {
        by_priority.entry(p.priority).or_default().push(p.id);
    }

    by_priority
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .collect()
}
