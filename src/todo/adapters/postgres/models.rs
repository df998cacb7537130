//! Diesel row models and the mapping between rows and todos.

use super::schema::todos;
use crate::todo::{
    domain::{PersistedTodoData, Priority, Todo, TodoChanges, TodoId, TodoTitle},
    ports::{TodoRepositoryError, TodoRepositoryResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Stored value of an incomplete todo.
pub(super) const ACTIVE_FLAG: i16 = 0;

/// Stored value of a completed todo.
pub(super) const COMPLETED_FLAG: i16 = 1;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Todo identifier.
    pub id: uuid::Uuid,
    /// Trimmed title.
    pub title: String,
    /// Completion flag as 0 or 1.
    pub completed: i16,
    /// Priority level.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Todo identifier.
    pub id: uuid::Uuid,
    /// Trimmed title.
    pub title: String,
    /// Completion flag as 0 or 1.
    pub completed: i16,
    /// Priority level.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Partial update for todo records; `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangeset {
    /// New title.
    pub title: Option<String>,
    /// New completion flag as 0 or 1.
    pub completed: Option<i16>,
    /// New priority level.
    pub priority: Option<String>,
    /// New due date; `Some(None)` clears it.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

/// Encodes the completion flag for storage.
pub(super) const fn completed_to_flag(completed: bool) -> i16 {
    if completed { COMPLETED_FLAG } else { ACTIVE_FLAG }
}

/// Decodes a stored completion flag, rejecting anything but 0 or 1.
pub(super) fn flag_to_completed(flag: i16) -> TodoRepositoryResult<bool> {
    match flag {
        ACTIVE_FLAG => Ok(false),
        COMPLETED_FLAG => Ok(true),
        other => Err(TodoRepositoryError::Corrupt(format!(
            "completed flag must be 0 or 1, found {other}"
        ))),
    }
}

pub(super) fn to_new_row(todo: &Todo, id: TodoId) -> NewTodoRow {
    NewTodoRow {
        id: id.into_inner(),
        title: todo.title().as_str().to_owned(),
        completed: completed_to_flag(todo.is_completed()),
        priority: todo.priority().as_str().to_owned(),
        due_date: todo.due_date(),
        created_at: todo.created_at(),
    }
}

pub(super) fn to_changeset(changes: &TodoChanges) -> TodoChangeset {
    TodoChangeset {
        title: changes.title().map(|title| title.as_str().to_owned()),
        completed: changes.completed().map(completed_to_flag),
        priority: changes.priority().map(|priority| priority.as_str().to_owned()),
        due_date: changes.due_date(),
    }
}

pub(super) fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        title,
        completed,
        priority,
        due_date,
        created_at,
    } = row;

    let title = TodoTitle::new(&title)
        .map_err(|err| TodoRepositoryError::Corrupt(format!("todo {id}: {err}")))?;
    let data = PersistedTodoData {
        id: TodoId::from_uuid(id),
        title,
        completed: flag_to_completed(completed)?,
        priority: Priority::from_stored(&priority),
        due_date,
        created_at,
    };
    Ok(Todo::from_persisted(data))
}
