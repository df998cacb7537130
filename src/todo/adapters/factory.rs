//! Composition of repositories, services and the store.
//!
//! The storage backend is chosen here, once, from configuration. Services
//! and the store only ever see `Arc<dyn TodoRepository>`.

use super::{
    memory::InMemoryTodoRepository,
    postgres::PostgresTodoRepository,
    remote::RemoteTodoRepository,
};
use crate::config::StorageBackend;
use crate::todo::{
    ports::TodoRepository,
    services::{TodoCommandService, TodoQueryService},
    store::TodoStore,
};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Builds the repository variant selected by `backend`.
///
/// The `PostgreSQL` pool connects lazily, so an unreachable database shows
/// up as a repository error on first use rather than here.
#[must_use]
pub fn build_repository(backend: &StorageBackend) -> Arc<dyn TodoRepository> {
    match backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "todo repository selected");
            Arc::new(InMemoryTodoRepository::new())
        }
        StorageBackend::Postgres { database_url } => {
            info!(backend = "postgres", "todo repository selected");
            let manager = ConnectionManager::<PgConnection>::new(database_url.as_str());
            let pool = Pool::builder().build_unchecked(manager);
            Arc::new(PostgresTodoRepository::new(pool))
        }
        StorageBackend::Remote { base_url } => {
            info!(backend = "remote", base_url = %base_url, "todo repository selected");
            Arc::new(RemoteTodoRepository::new(base_url.as_str()))
        }
    }
}

/// Wires command and query services over `repository` into a new store.
#[must_use]
pub fn build_store<C>(repository: Arc<dyn TodoRepository>, clock: Arc<C>) -> TodoStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    let commands = TodoCommandService::new(Arc::clone(&repository), Arc::clone(&clock));
    let queries = TodoQueryService::new(repository);
    TodoStore::new(Arc::new(commands), Arc::new(queries), clock)
}
