//! Command service executing validated todo mutations.

use super::{
    CreateTodoRequest, TodoCommands, TodoServiceError, TodoServiceResult, UpdateTodoRequest,
};
use crate::todo::{
    domain::{Todo, TodoChanges, TodoId},
    ports::TodoRepository,
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Todo command orchestration service.
pub struct TodoCommandService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TodoCommandService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoCommandService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new command service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Loads the current record or reports it missing.
    async fn require(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }
}

#[async_trait]
impl<R, C> TodoCommands for TodoCommandService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    async fn create_todo(&self, request: CreateTodoRequest) -> TodoServiceResult<Todo> {
        let params = request.validate()?;
        let todo = Todo::new(params, &*self.clock);
        let id = self.repository.create(&todo).await?;
        debug!(todo_id = %id, "todo created");
        self.require(id).await
    }

    async fn update_todo(
        &self,
        id: TodoId,
        request: UpdateTodoRequest,
    ) -> TodoServiceResult<Todo> {
        let changes = request.validate()?;
        self.require(id).await?;
        let updated = self.repository.update(id, &changes).await?;
        debug!(todo_id = %id, "todo updated");
        Ok(updated)
    }

    async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<Todo> {
        let existing = self.require(id).await?;
        self.repository.delete(id).await?;
        debug!(todo_id = %id, "todo deleted");
        Ok(existing)
    }

    async fn toggle_todo(&self, id: TodoId) -> TodoServiceResult<Todo> {
        let existing = self.require(id).await?;
        let changes = TodoChanges::new().with_completed(!existing.is_completed());
        let toggled = self.repository.update(id, &changes).await?;
        debug!(todo_id = %id, completed = toggled.is_completed(), "todo toggled");
        Ok(toggled)
    }
}
