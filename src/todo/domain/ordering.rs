//! Urgency and ordering rules over todo snapshots.
//!
//! All functions are pure and take the reference time explicitly. Callers
//! that want "now" read it from a [`mockable::Clock`].

use super::Todo;
use chrono::{DateTime, TimeDelta, Utc};
use std::cmp::Reverse;

/// Age after which an incomplete todo counts as overdue.
const OVERDUE_AFTER_DAYS: i64 = 7;

/// Whole weeks of age beyond which urgency stops growing.
const MAX_AGE_WEEKS: i64 = 3;

/// Reason reported when a completed todo is asked to complete again.
pub const ALREADY_COMPLETED_REASON: &str = "Todo is already completed";

/// Outcome of [`can_complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionCheck {
    /// Whether the todo may be marked as completed.
    pub can_complete: bool,
    /// Why completion is refused, when it is.
    pub reason: Option<&'static str>,
}

/// Returns whether an incomplete todo is older than seven days at `now`.
///
/// A todo aged exactly seven days is not overdue.
#[must_use]
pub fn is_overdue(todo: &Todo, now: DateTime<Utc>) -> bool {
    if todo.is_completed() {
        return false;
    }
    now.signed_duration_since(todo.created_at()) > TimeDelta::days(OVERDUE_AFTER_DAYS)
}

/// Scores how urgently a todo needs attention at `now`.
///
/// Completed todos score 0. Otherwise the priority weight is multiplied by
/// one plus the number of whole weeks since creation, capped at three weeks.
/// Todos created after `now` are treated as brand new.
#[must_use]
pub fn urgency_score(todo: &Todo, now: DateTime<Utc>) -> u32 {
    if todo.is_completed() {
        return 0;
    }
    let weeks = now
        .signed_duration_since(todo.created_at())
        .num_weeks()
        .clamp(0, MAX_AGE_WEEKS);
    let age_factor = u32::try_from(weeks).unwrap_or_default() + 1;
    todo.priority().weight() * age_factor
}

/// Reports whether a todo may be completed.
#[must_use]
pub const fn can_complete(todo: &Todo) -> CompletionCheck {
    if todo.is_completed() {
        CompletionCheck {
            can_complete: false,
            reason: Some(ALREADY_COMPLETED_REASON),
        }
    } else {
        CompletionCheck {
            can_complete: true,
            reason: None,
        }
    }
}

/// Orders todos for presentation without touching the input.
///
/// Incomplete todos come first by descending urgency, ties keeping their
/// original relative order. Completed todos follow in their original order.
#[must_use]
pub fn sort_by_priority(todos: &[Todo], now: DateTime<Utc>) -> Vec<Todo> {
    let (mut active, completed): (Vec<Todo>, Vec<Todo>) =
        todos.iter().cloned().partition(|todo| !todo.is_completed());
    active.sort_by_key(|todo| Reverse(urgency_score(todo, now)));
    active.extend(completed);
    active
}

/// Returns the incomplete todos that are overdue at `now`, in input order.
#[must_use]
pub fn overdue(todos: &[Todo], now: DateTime<Utc>) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| is_overdue(todo, now))
        .cloned()
        .collect()
}
