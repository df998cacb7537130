//! Wire representations of todos.

use crate::todo::{
    domain::{PersistedTodoData, Priority, Todo, TodoChanges, TodoId, TodoTitle},
    ports::{TodoRepositoryError, TodoRepositoryResult},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Todo as exchanged with the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    /// Identifier, absent before the server assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title.
    pub title: String,
    /// Completion flag; `0` and `1` are accepted on input.
    #[serde(default, deserialize_with = "deserialize_completed")]
    pub completed: bool,
    /// Priority level.
    #[serde(default)]
    pub priority: Option<String>,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().map(|id| id.to_string()),
            title: todo.title().as_str().to_owned(),
            completed: todo.is_completed(),
            priority: Some(todo.priority().as_str().to_owned()),
            due_date: todo.due_date(),
            created_at: todo.created_at(),
        }
    }
}

impl TodoDto {
    /// Converts a server-issued todo into the domain entity.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Corrupt`] when the identifier is missing
    /// or malformed, or the title breaks the title invariants.
    pub fn into_todo(self) -> TodoRepositoryResult<Todo> {
        let raw_id = self
            .id
            .ok_or_else(|| TodoRepositoryError::Corrupt("todo without identifier".to_owned()))?;
        let id = raw_id
            .parse::<TodoId>()
            .map_err(|err| TodoRepositoryError::Corrupt(format!("{err}")))?;
        let title = TodoTitle::new(&self.title)
            .map_err(|err| TodoRepositoryError::Corrupt(format!("todo {raw_id}: {err}")))?;
        Ok(Todo::from_persisted(PersistedTodoData {
            id,
            title,
            completed: self.completed,
            priority: self
                .priority
                .as_deref()
                .map(Priority::from_stored)
                .unwrap_or_default(),
            due_date: self.due_date,
            created_at: self.created_at,
        }))
    }
}

/// Partial update sent to the remote service; absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoChangesDto {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New completion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// New priority level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// New due date; `Some(None)` is sent as `null` to clear it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl From<&TodoChanges> for TodoChangesDto {
    fn from(changes: &TodoChanges) -> Self {
        Self {
            title: changes.title().map(|title| title.as_str().to_owned()),
            completed: changes.completed(),
            priority: changes.priority().map(|priority| priority.as_str().to_owned()),
            due_date: changes.due_date(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompletedFlag {
    Bool(bool),
    Int(i64),
}

fn deserialize_completed<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match CompletedFlag::deserialize(deserializer)? {
        CompletedFlag::Bool(value) => Ok(value),
        CompletedFlag::Int(0) => Ok(false),
        CompletedFlag::Int(1) => Ok(true),
        CompletedFlag::Int(other) => Err(serde::de::Error::custom(format!(
            "completed flag must be 0 or 1, found {other}"
        ))),
    }
}
