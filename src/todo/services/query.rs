//! Query service executing read-only todo lookups.

use super::{TodoQueries, TodoServiceResult};
use crate::todo::{
    domain::{Todo, TodoFilter, TodoId, TodoSpecification, TodoStats},
    ports::TodoRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Todo query service.
pub struct TodoQueryService<R>
where
    R: TodoRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for TodoQueryService<R>
where
    R: TodoRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TodoQueryService<R>
where
    R: TodoRepository + ?Sized,
{
    /// Creates a new query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TodoQueries for TodoQueryService<R>
where
    R: TodoRepository + ?Sized,
{
    async fn get_all_todos(&self) -> TodoServiceResult<Vec<Todo>> {
        Ok(self.repository.get_all().await?)
    }

    async fn get_active_todos(&self) -> TodoServiceResult<Vec<Todo>> {
        Ok(self.repository.get_active().await?)
    }

    async fn get_completed_todos(&self) -> TodoServiceResult<Vec<Todo>> {
        Ok(self.repository.get_completed().await?)
    }

    async fn get_todo_by_id(&self, id: &str) -> TodoServiceResult<Option<Todo>> {
        let todo_id: TodoId = id.parse()?;
        Ok(self.repository.get_by_id(todo_id).await?)
    }

    async fn get_todo_stats(&self) -> TodoServiceResult<TodoStats> {
        let todos = self.repository.get_all().await?;
        Ok(TodoStats::from_todos(&todos))
    }

    async fn get_filtered_todos(&self, filter: TodoFilter) -> TodoServiceResult<Vec<Todo>> {
        match filter {
            TodoFilter::All => self.get_all_todos().await,
            TodoFilter::Active => self.get_active_todos().await,
            TodoFilter::Completed => self.get_completed_todos().await,
        }
    }

    async fn find_todos(
        &self,
        specification: &TodoSpecification,
    ) -> TodoServiceResult<Vec<Todo>> {
        Ok(self.repository.find_by_specification(specification).await?)
    }
}
