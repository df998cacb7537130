//! Aggregate counts over a todo collection.

use super::Todo;
use serde::{Deserialize, Serialize};

/// Totals derived from a todo collection.
///
/// `active + completed == total` always holds for values built with
/// [`TodoStats::from_todos`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    /// Number of todos.
    pub total: usize,
    /// Number of todos not yet completed.
    pub active: usize,
    /// Number of completed todos.
    pub completed: usize,
}

impl TodoStats {
    /// Counts the todos in a collection.
    #[must_use]
    pub fn from_todos<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Self {
        todos.into_iter().fold(Self::default(), |mut stats, todo| {
            stats.total += 1;
            if todo.is_completed() {
                stats.completed += 1;
            } else {
                stats.active += 1;
            }
            stats
        })
    }
}
