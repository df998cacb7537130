//! Unvalidated request payloads accepted by the command service.

use crate::todo::domain::{NewTodo, Priority, TodoChanges, TodoDomainError, TodoTitle};
use chrono::{DateTime, NaiveDate, Utc};

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    title: String,
    priority: Option<String>,
    due_date: Option<String>,
}

impl CreateTodoRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: None,
            due_date: None,
        }
    }

    /// Sets the priority (`low`, `medium` or `high`).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date as an RFC 3339 timestamp or `YYYY-MM-DD` date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Validates the request into creation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError`] when the title, priority or due date is
    /// invalid.
    pub fn validate(&self) -> Result<NewTodo, TodoDomainError> {
        let title = TodoTitle::new(&self.title)?;
        let priority = self
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?
            .unwrap_or_default();
        let due_date = self.due_date.as_deref().map(parse_due_date).transpose()?;
        Ok(NewTodo::new(title)
            .with_priority(priority)
            .with_due_date(due_date))
    }
}

/// Request payload for changing an existing todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    title: Option<String>,
    completed: Option<bool>,
    priority: Option<String>,
    due_date: Option<Option<String>>,
}

impl UpdateTodoRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(Some(due_date.into()));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub fn clearing_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Validates the request into a change set.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError`] when a supplied field is invalid.
    pub fn validate(&self) -> Result<TodoChanges, TodoDomainError> {
        let mut changes = TodoChanges::new();
        if let Some(title) = &self.title {
            changes = changes.with_title(TodoTitle::new(title)?);
        }
        if let Some(completed) = self.completed {
            changes = changes.with_completed(completed);
        }
        if let Some(priority) = &self.priority {
            changes = changes.with_priority(priority.parse()?);
        }
        if let Some(due_date) = &self.due_date {
            changes = changes.with_due_date(due_date.as_deref().map(parse_due_date).transpose()?);
        }
        Ok(changes)
    }
}

/// Parses an RFC 3339 timestamp, or a bare date taken as midnight UTC.
fn parse_due_date(value: &str) -> Result<DateTime<Utc>, TodoDomainError> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| TodoDomainError::InvalidDueDate(value.to_owned()))
}
