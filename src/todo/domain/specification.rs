//! Predicates used to select todos from a repository.

use super::{Priority, Todo, TodoFilter};
use chrono::{DateTime, Utc};

/// Composable predicate over todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSpecification {
    /// Matches every todo.
    Any,
    /// Matches todos whose completion flag equals the value.
    Completed(bool),
    /// Matches todos with the given priority.
    Priority(Priority),
    /// Matches todos with a due date strictly before the timestamp.
    DueBefore(DateTime<Utc>),
    /// Matches todos whose title contains the text, ignoring case.
    TitleContains(String),
    /// Matches todos satisfying both specifications.
    And(Box<TodoSpecification>, Box<TodoSpecification>),
}

impl TodoSpecification {
    /// Combines two specifications so both must hold.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Returns whether the todo satisfies this specification.
    #[must_use]
    pub fn is_satisfied_by(&self, todo: &Todo) -> bool {
        match self {
            Self::Any => true,
            Self::Completed(completed) => todo.is_completed() == *completed,
            Self::Priority(priority) => todo.priority() == *priority,
            Self::DueBefore(limit) => todo.due_date().is_some_and(|due| due < *limit),
            Self::TitleContains(needle) => todo
                .title()
                .as_str()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Self::And(left, right) => left.is_satisfied_by(todo) && right.is_satisfied_by(todo),
        }
    }
}

impl From<TodoFilter> for TodoSpecification {
    fn from(filter: TodoFilter) -> Self {
        match filter {
            TodoFilter::All => Self::Any,
            TodoFilter::Active => Self::Completed(false),
            TodoFilter::Completed => Self::Completed(true),
        }
    }
}
