//! In-memory repository for todos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Todo, TodoChanges, TodoId, TodoSpecification},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let todos = self.todos.read().map_err(lock_error)?;
        Ok(todos.clone())
    }

    async fn get_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let todos = self.todos.read().map_err(lock_error)?;
        Ok(todos.iter().find(|todo| todo.has_id(id)).cloned())
    }

    async fn create(&self, todo: &Todo) -> TodoRepositoryResult<TodoId> {
        let mut todos = self.todos.write().map_err(lock_error)?;
        let id = todo.id().unwrap_or_default();
        if todos.iter().any(|existing| existing.has_id(id)) {
            return Err(TodoRepositoryError::Duplicate(id));
        }
        todos.push(todo.with_id(id));
        Ok(id)
    }

    async fn update(&self, id: TodoId, changes: &TodoChanges) -> TodoRepositoryResult<Todo> {
        let mut todos = self.todos.write().map_err(lock_error)?;
        let slot = todos
            .iter_mut()
            .find(|todo| todo.has_id(id))
            .ok_or(TodoRepositoryError::NotFound(id))?;
        let updated = slot.apply(changes);
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut todos = self.todos.write().map_err(lock_error)?;
        let position = todos
            .iter()
            .position(|todo| todo.has_id(id))
            .ok_or(TodoRepositoryError::NotFound(id))?;
        todos.remove(position);
        Ok(())
    }

    async fn find_by_specification(
        &self,
        specification: &TodoSpecification,
    ) -> TodoRepositoryResult<Vec<Todo>> {
        let todos = self.todos.read().map_err(lock_error)?;
        Ok(todos
            .iter()
            .filter(|todo| specification.is_satisfied_by(todo))
            .cloned()
            .collect())
    }
}
