//! Repository port for todo persistence and lookup.

use crate::todo::domain::{Todo, TodoChanges, TodoId, TodoSpecification};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Implementations may store the completion flag in any encoding, but must
/// hand back exactly the boolean they were given.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every todo in persisted order.
    async fn get_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Returns todos that are not completed.
    async fn get_active(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.find_by_specification(&TodoSpecification::Completed(false))
            .await
    }

    /// Returns completed todos.
    async fn get_completed(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.find_by_specification(&TodoSpecification::Completed(true))
            .await
    }

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn get_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Stores a new todo and returns the identifier assigned to it.
    async fn create(&self, todo: &Todo) -> TodoRepositoryResult<TodoId>;

    /// Applies changes to an existing todo and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn update(&self, id: TodoId, changes: &TodoChanges) -> TodoRepositoryResult<Todo>;

    /// Removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;

    /// Returns the todos satisfying the specification, in persisted order.
    async fn find_by_specification(
        &self,
        specification: &TodoSpecification,
    ) -> TodoRepositoryResult<Vec<Todo>>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// A todo with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    Duplicate(TodoId),

    /// The remote service refused the request and explained why.
    #[error("{0}")]
    Rejected(String),

    /// The remote service could not be reached or answered unintelligibly.
    #[error("transport error: {0}")]
    Transport(String),

    /// A stored record could not be mapped back into a todo.
    #[error("corrupt todo record: {0}")]
    Corrupt(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
