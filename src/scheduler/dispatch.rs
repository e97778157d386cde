//! Dispatch ordering shared by both schedulers.
//!
//! Compares candidates in sequence: priority, then arrival, then ID. The
//! final ID comparison makes the order total, so selection never depends
//! on queue layout and re-evaluating it every tick cannot thrash between
//! equal-priority processes.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;

use crate::models::Process;

/// Compares two processes by dispatch precedence.
///
/// `Ordering::Less` means `a` runs before `b`:
/// 1. Smaller `priority` value first.
/// 2. On equal priority, earlier `arrival` first.
/// 3. On equal arrival, smaller `id` first.
pub fn dispatch_order(a: &Process, b: &Process) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.arrival.cmp(&b.arrival))
        .then_with(|| a.id.cmp(&b.id))
}

/// Picks the highest-precedence candidate.
///
/// Candidates are `(key, process)` pairs; the key of the winner is
/// returned so callers can address their own storage (queue position,
/// pool index). Returns `None` if there are no candidates.
pub fn select_next<'a, I>(candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, &'a Process)>,
{
    candidates
        .into_iter()
        .min_by(|(_, a), (_, b)| dispatch_order(a, b))
        .map(|(key, _)| key)
}
