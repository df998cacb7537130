//! Partial changes applied to an existing todo.

use super::{Priority, TodoTitle};
use chrono::{DateTime, Utc};

/// Validated set of field changes for an existing todo.
///
/// Absent fields are left untouched. The due date distinguishes between
/// "leave as is" (`None`) and "set to this value or clear" (`Some`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    title: Option<TodoTitle>,
    completed: Option<bool>,
    priority: Option<Priority>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl TodoChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TodoTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the new title, if changed.
    #[must_use]
    pub const fn title(&self) -> Option<&TodoTitle> {
        self.title.as_ref()
    }

    /// Returns the new completion flag, if changed.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }

    /// Returns the new priority, if changed.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the due date change, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<Option<DateTime<Utc>>> {
        self.due_date
    }

    /// Returns `true` when no field is changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}
