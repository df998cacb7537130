//! Shared fixtures, fakes and mocks for todo unit tests.

use crate::todo::{
    domain::{PersistedTodoData, Priority, Todo, TodoFilter, TodoId, TodoSpecification, TodoStats, TodoTitle},
    ports::TodoRepositoryError,
    services::{
        CreateTodoRequest, TodoCommands, TodoQueries, TodoServiceError, TodoServiceResult,
        UpdateTodoRequest,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use mockall::mock;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tokio::sync::oneshot;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reference instant used across tests.
pub(super) fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0)
        .single()
        .expect("valid reference instant")
}

/// Builds a persisted todo with the given attributes.
pub(super) fn persisted(
    title: &str,
    priority: Priority,
    created_at: DateTime<Utc>,
    completed: bool,
) -> Todo {
    Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(),
        title: TodoTitle::new(title).expect("valid test title"),
        completed,
        priority,
        due_date: None,
        created_at,
    })
}

/// Transport failure carrying no user-facing message.
pub(super) fn network_error() -> TodoServiceError {
    TodoServiceError::Repository(TodoRepositoryError::Transport("Network error".to_owned()))
}

mock! {
    pub Commands {}

    #[async_trait]
    impl TodoCommands for Commands {
        async fn create_todo(&self, request: CreateTodoRequest) -> TodoServiceResult<Todo>;
        async fn update_todo(&self, id: TodoId, request: UpdateTodoRequest) -> TodoServiceResult<Todo>;
        async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<Todo>;
        async fn toggle_todo(&self, id: TodoId) -> TodoServiceResult<Todo>;
    }
}

mock! {
    pub Queries {}

    #[async_trait]
    impl TodoQueries for Queries {
        async fn get_all_todos(&self) -> TodoServiceResult<Vec<Todo>>;
        async fn get_active_todos(&self) -> TodoServiceResult<Vec<Todo>>;
        async fn get_completed_todos(&self) -> TodoServiceResult<Vec<Todo>>;
        async fn get_todo_by_id(&self, id: &str) -> TodoServiceResult<Option<Todo>>;
        async fn get_todo_stats(&self) -> TodoServiceResult<TodoStats>;
        async fn get_filtered_todos(&self, filter: TodoFilter) -> TodoServiceResult<Vec<Todo>>;
        async fn find_todos(&self, specification: &TodoSpecification) -> TodoServiceResult<Vec<Todo>>;
    }
}

/// Queries mock whose `get_all_todos` returns `todos`.
pub(super) fn queries_returning(todos: Vec<Todo>) -> MockQueries {
    let mut queries = MockQueries::new();
    queries
        .expect_get_all_todos()
        .returning(move || Ok(todos.clone()));
    queries
}

type Gate = oneshot::Receiver<TodoServiceResult<Todo>>;

/// Command fake whose calls block until the test releases them.
///
/// Each call takes the oldest open gate and resolves with whatever the test
/// sends through it.
#[derive(Default)]
pub(super) struct GatedCommands {
    gates: Mutex<VecDeque<Gate>>,
}

impl GatedCommands {
    /// Opens a gate for the next command call and returns its release handle.
    pub(super) fn gate(&self) -> oneshot::Sender<TodoServiceResult<Todo>> {
        let (release, gate) = oneshot::channel();
        self.gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(gate);
        release
    }

    async fn pass(&self) -> TodoServiceResult<Todo> {
        let gate = self
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match gate {
            Some(gate) => gate.await.unwrap_or_else(|_| Err(network_error())),
            None => Err(network_error()),
        }
    }
}

#[async_trait]
impl TodoCommands for GatedCommands {
    async fn create_todo(&self, _request: CreateTodoRequest) -> TodoServiceResult<Todo> {
        self.pass().await
    }

    async fn update_todo(
        &self,
        _id: TodoId,
        _request: UpdateTodoRequest,
    ) -> TodoServiceResult<Todo> {
        self.pass().await
    }

    async fn delete_todo(&self, _id: TodoId) -> TodoServiceResult<Todo> {
        self.pass().await
    }

    async fn toggle_todo(&self, _id: TodoId) -> TodoServiceResult<Todo> {
        self.pass().await
    }
}

/// Lets every other branch of a `join!` make progress.
pub(super) async fn let_others_run() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
