//! Shared test helpers for in-memory todo integration tests.

use std::sync::Arc;

use eyre::{WrapErr, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use tallyo::{
    config::StorageBackend,
    todo::{
        adapters::factory::{build_repository, build_store},
        domain::{Todo, TodoId},
        ports::TodoRepository,
        services::CreateTodoRequest,
        store::TodoStore,
    },
};

/// Store wired to the in-memory backend with the system clock.
pub type MemoryStore = TodoStore<DefaultClock>;

/// Provides a repository built by the backend factory.
#[fixture]
pub fn repository() -> Arc<dyn TodoRepository> {
    build_repository(&StorageBackend::Memory)
}

/// Wires a store over `repository`.
pub fn store_over(repository: &Arc<dyn TodoRepository>) -> MemoryStore {
    build_store(Arc::clone(repository), Arc::new(DefaultClock))
}

/// Creates one todo per title and returns them in call order.
///
/// # Errors
///
/// Returns an error if any create fails.
pub async fn create_all(store: &MemoryStore, titles: &[&str]) -> eyre::Result<Vec<Todo>> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        let todo = store
            .create(CreateTodoRequest::new(*title))
            .await
            .wrap_err_with(|| format!("creating '{title}'"))?;
        created.push(todo);
    }
    Ok(created)
}

/// Returns the identifier of a persisted todo.
///
/// # Errors
///
/// Returns an error if the todo has not been persisted.
pub fn id_of(todo: &Todo) -> eyre::Result<TodoId> {
    todo.id()
        .ok_or_else(|| eyre!("todo '{}' has no identifier", todo.title()))
}
