//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{
        NewTodoRow, TodoRow, completed_to_flag, row_to_todo, to_changeset, to_new_row,
    },
    schema::todos,
};
use crate::todo::{
    domain::{Todo, TodoChanges, TodoId, TodoSpecification},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }

    async fn load_where_completed(&self, completed: bool) -> TodoRepositoryResult<Vec<Todo>> {
        let flag = completed_to_flag(completed);
        self.run_blocking(move |connection| {
            let rows = todos::table
                .filter(todos::completed.eq(flag))
                .order((todos::created_at.asc(), todos::id.asc()))
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }
}

fn find_row(connection: &mut PgConnection, id: TodoId) -> TodoRepositoryResult<Option<TodoRow>> {
    todos::table
        .find(id.into_inner())
        .select(TodoRow::as_select())
        .first::<TodoRow>(connection)
        .optional()
        .map_err(TodoRepositoryError::persistence)
}

fn load_all(connection: &mut PgConnection) -> TodoRepositoryResult<Vec<Todo>> {
    let rows = todos::table
        .order((todos::created_at.asc(), todos::id.asc()))
        .select(TodoRow::as_select())
        .load::<TodoRow>(connection)
        .map_err(TodoRepositoryError::persistence)?;
    rows.into_iter().map(row_to_todo).collect()
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn get_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(load_all).await
    }

    async fn get_active(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.load_where_completed(false).await
    }

    async fn get_completed(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.load_where_completed(true).await
    }

    async fn get_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| find_row(connection, id)?.map(row_to_todo).transpose())
            .await
    }

    async fn create(&self, todo: &Todo) -> TodoRepositoryResult<TodoId> {
        let id = todo.id().unwrap_or_default();
        let new_row: NewTodoRow = to_new_row(todo, id);

        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::Duplicate(id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            Ok(id)
        })
        .await
    }

    async fn update(&self, id: TodoId, changes: &TodoChanges) -> TodoRepositoryResult<Todo> {
        let changeset = to_changeset(changes);
        let is_empty = changes.is_empty();

        self.run_blocking(move |connection| {
            // Diesel refuses an UPDATE without assignments.
            let row = if is_empty {
                find_row(connection, id)?
            } else {
                diesel::update(todos::table.find(id.into_inner()))
                    .set(&changeset)
                    .returning(TodoRow::as_returning())
                    .get_result::<TodoRow>(connection)
                    .optional()
                    .map_err(TodoRepositoryError::persistence)?
            };
            row.map(row_to_todo)
                .transpose()?
                .ok_or(TodoRepositoryError::NotFound(id))
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(todos::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if removed == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_specification(
        &self,
        specification: &TodoSpecification,
    ) -> TodoRepositoryResult<Vec<Todo>> {
        let all = self.run_blocking(load_all).await?;
        Ok(all
            .into_iter()
            .filter(|todo| specification.is_satisfied_by(todo))
            .collect())
    }
}
