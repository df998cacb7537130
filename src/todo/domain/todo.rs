//! Todo entity and its construction parameters.

use super::{Priority, TodoChanges, TodoId, TodoTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Parameter object for creating a todo that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: TodoTitle,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
}

impl NewTodo {
    /// Creates creation parameters with the default priority and no due date.
    #[must_use]
    pub fn new(title: TodoTitle) -> Self {
        Self {
            title,
            priority: Priority::default(),
            due_date: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Todo entity.
///
/// Values are never mutated in place. Every transition returns a new `Todo`,
/// so a clone taken before a change is unaffected by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: Option<TodoId>,
    title: TodoTitle,
    completed: bool,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: TodoTitle,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, incomplete todo stamped with the clock's current time.
    #[must_use]
    pub fn new(params: NewTodo, clock: &impl Clock) -> Self {
        Self {
            id: None,
            title: params.title,
            completed: false,
            priority: params.priority,
            due_date: params.due_date,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            completed: data.completed,
            priority: data.priority,
            due_date: data.due_date,
            created_at: data.created_at,
        }
    }

    /// Returns the identifier, or `None` before first persistence.
    #[must_use]
    pub const fn id(&self) -> Option<TodoId> {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns whether the todo is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the todo carries the given identifier.
    #[must_use]
    pub fn has_id(&self, id: TodoId) -> bool {
        self.id == Some(id)
    }

    /// Returns a copy carrying the identifier assigned by persistence.
    ///
    /// An identifier that is already assigned is kept.
    #[must_use]
    pub fn with_id(&self, id: TodoId) -> Self {
        Self {
            id: self.id.or(Some(id)),
            ..self.clone()
        }
    }

    /// Returns a copy with the completion flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Returns a copy with the given changes applied.
    ///
    /// The identifier and creation timestamp never change.
    #[must_use]
    pub fn apply(&self, changes: &TodoChanges) -> Self {
        Self {
            id: self.id,
            title: changes.title().cloned().unwrap_or_else(|| self.title.clone()),
            completed: changes.completed().unwrap_or(self.completed),
            priority: changes.priority().unwrap_or(self.priority),
            due_date: changes.due_date().unwrap_or(self.due_date),
            created_at: self.created_at,
        }
    }
}
