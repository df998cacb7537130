//! Use-case contracts consumed by the mutation store.

use super::{CreateTodoRequest, TodoServiceResult, UpdateTodoRequest};
use crate::todo::domain::{Todo, TodoFilter, TodoId, TodoSpecification, TodoStats};
use async_trait::async_trait;

/// Mutating todo use cases.
///
/// Every operation returns the canonical todo after the operation so the
/// caller can reconcile local state with it.
#[async_trait]
pub trait TodoCommands: Send + Sync {
    /// Validates and persists a new todo.
    async fn create_todo(&self, request: CreateTodoRequest) -> TodoServiceResult<Todo>;

    /// Validates and applies changes to an existing todo.
    async fn update_todo(&self, id: TodoId, request: UpdateTodoRequest)
    -> TodoServiceResult<Todo>;

    /// Deletes a todo and returns the record as it was before deletion.
    async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<Todo>;

    /// Flips the completion flag of a todo.
    async fn toggle_todo(&self, id: TodoId) -> TodoServiceResult<Todo>;
}

/// Read-only todo use cases.
#[async_trait]
pub trait TodoQueries: Send + Sync {
    /// Returns every todo.
    async fn get_all_todos(&self) -> TodoServiceResult<Vec<Todo>>;

    /// Returns todos that are not completed.
    async fn get_active_todos(&self) -> TodoServiceResult<Vec<Todo>>;

    /// Returns completed todos.
    async fn get_completed_todos(&self) -> TodoServiceResult<Vec<Todo>>;

    /// Looks up a todo by its textual identifier.
    ///
    /// Returns `Ok(None)` when no todo has the identifier.
    async fn get_todo_by_id(&self, id: &str) -> TodoServiceResult<Option<Todo>>;

    /// Returns aggregate counts over every todo.
    async fn get_todo_stats(&self) -> TodoServiceResult<TodoStats>;

    /// Returns the todos passing a completion filter.
    async fn get_filtered_todos(&self, filter: TodoFilter) -> TodoServiceResult<Vec<Todo>>;

    /// Returns the todos satisfying an arbitrary specification.
    async fn find_todos(
        &self,
        specification: &TodoSpecification,
    ) -> TodoServiceResult<Vec<Todo>>;
}
