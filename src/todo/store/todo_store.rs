//! Store actions and their optimistic-update algorithm.

use super::{
    in_flight::InFlightIds,
    state::{StoreStatus, TodoStoreState},
};
use crate::todo::{
    domain::{Todo, TodoFilter, TodoId, TodoStats, ordering},
    services::{
        CreateTodoRequest, TodoCommands, TodoQueries, TodoServiceError, TodoServiceResult,
        UpdateTodoRequest,
    },
};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Error shown when loading fails without a user-facing message.
pub const LOAD_FAILED: &str = "Failed to load todos";
/// Error shown when creating fails without a user-facing message.
pub const CREATE_FAILED: &str = "Failed to create todo";
/// Error shown when updating fails without a user-facing message.
pub const UPDATE_FAILED: &str = "Failed to update todo";
/// Error shown when deleting fails without a user-facing message.
pub const DELETE_FAILED: &str = "Failed to delete todo";
/// Error shown when toggling fails without a user-facing message.
pub const TOGGLE_FAILED: &str = "Failed to toggle todo";

/// Optimistic todo store.
///
/// Create, update, delete and toggle follow the same protocol:
///
/// 1. remember what the target looked like,
/// 2. apply the expected outcome locally,
/// 3. mark the store as loading,
/// 4. run the remote command,
/// 5. on success replace the local guess with the canonical todo,
/// 6. on failure put the target back as it was, record the error and return
///    it.
///
/// Only the action's own change is undone, so a failure never discards what
/// a concurrent action on another todo has already settled. Without
/// concurrent actions the collection after a failure equals the collection
/// before the call.
///
/// `load` replaces the collection wholesale and absorbs its failures.
///
/// Update, delete and toggle on the same todo run one after another, so a
/// later mutation never captures the speculative state of an earlier one.
///
/// Dropping an action's future before it resolves undoes its local change
/// and leaves the loading status.
pub struct TodoStore<C>
where
    C: Clock + Send + Sync,
{
    commands: Arc<dyn TodoCommands>,
    queries: Arc<dyn TodoQueries>,
    clock: Arc<C>,
    state: watch::Sender<TodoStoreState>,
    in_flight: InFlightIds,
}

impl<C> TodoStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty, idle store.
    #[must_use]
    pub fn new(
        commands: Arc<dyn TodoCommands>,
        queries: Arc<dyn TodoQueries>,
        clock: Arc<C>,
    ) -> Self {
        let (state, _) = watch::channel(TodoStoreState::default());
        Self {
            commands,
            queries,
            clock,
            state,
            in_flight: InFlightIds::default(),
        }
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TodoStoreState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> TodoStoreState {
        self.state.borrow().clone()
    }

    /// Returns a copy of the whole collection.
    #[must_use]
    pub fn todos(&self) -> Vec<Todo> {
        self.state.borrow().todos().to_vec()
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> TodoFilter {
        self.state.borrow().filter()
    }

    /// Returns the status of the most recent action.
    #[must_use]
    pub fn status(&self) -> StoreStatus {
        self.state.borrow().status()
    }

    /// Returns the message describing the last failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_owned)
    }

    /// Returns the todos passing the active filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<Todo> {
        self.state.borrow().filtered()
    }

    /// Counts the todos in the collection.
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        self.state.borrow().stats()
    }

    /// Returns `true` while an action is waiting for its remote result.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Returns `true` when the store is idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state.borrow().is_idle()
    }

    /// Returns `true` when the most recent action failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.state.borrow().has_error()
    }

    /// Returns the filtered todos ordered by urgency at the clock's time.
    #[must_use]
    pub fn prioritized(&self) -> Vec<Todo> {
        ordering::sort_by_priority(&self.filtered(), self.clock.utc())
    }

    /// Returns the overdue todos at the clock's time.
    #[must_use]
    pub fn overdue(&self) -> Vec<Todo> {
        ordering::overdue(&self.todos(), self.clock.utc())
    }

    /// Changes the active filter without touching the status.
    pub fn set_filter(&self, filter: impl Into<TodoFilter>) {
        let filter = filter.into();
        self.state.send_modify(|state| state.filter = filter);
    }

    /// Clears the recorded error, returning a failed store to idle.
    pub fn clear_error(&self) {
        self.state.send_modify(|state| {
            state.error = None;
            if state.status == StoreStatus::Failed {
                state.status = StoreStatus::Idle;
            }
        });
    }

    /// Replaces the collection with every persisted todo.
    ///
    /// Failures are recorded in the state and not returned; calling `load`
    /// again retries.
    pub async fn load(&self) {
        let pending = self.speculate(|_| Undo::Nothing);
        match self.queries.get_all_todos().await {
            Ok(todos) => {
                debug!(count = todos.len(), "todos loaded");
                pending.settle(|collection| *collection = todos);
            }
            Err(err) => pending.fail(&err, "load", LOAD_FAILED),
        }
    }

    /// Creates a todo, showing it at the head of the collection immediately.
    ///
    /// # Errors
    ///
    /// Returns the command's [`TodoServiceError`] after removing the
    /// provisional todo.
    pub async fn create(&self, request: CreateTodoRequest) -> TodoServiceResult<Todo> {
        let provisional = request
            .validate()
            .ok()
            .map(|params| Todo::new(params, &*self.clock));
        let guess = provisional.clone();
        let pending = self.speculate(move |collection| {
            guess.map_or(Undo::Nothing, |todo| {
                collection.insert(0, todo.clone());
                Undo::Remove(todo)
            })
        });
        debug!(action = "create", "optimistic change applied");

        match self.commands.create_todo(request).await {
            Ok(created) => {
                pending.settle(|collection| {
                    if let Some(position) = provisional
                        .as_ref()
                        .and_then(|guess| collection.iter().position(|todo| todo == guess))
                    {
                        collection.remove(position);
                    }
                    if let Some(id) = created.id() {
                        collection.retain(|todo| !todo.has_id(id));
                    }
                    collection.insert(0, created.clone());
                });
                Ok(created)
            }
            Err(err) => {
                pending.fail(&err, "create", CREATE_FAILED);
                Err(err)
            }
        }
    }

    /// Applies changes to a todo, showing the expected result immediately.
    ///
    /// When the request does not validate locally, nothing changes until the
    /// command reports the failure.
    ///
    /// # Errors
    ///
    /// Returns the command's [`TodoServiceError`] after restoring the todo.
    pub async fn update(&self, id: TodoId, request: UpdateTodoRequest) -> TodoServiceResult<Todo> {
        let _claim = self.in_flight.acquire(id).await;
        let changes = request.validate().ok();
        let pending = self.speculate(|collection| {
            changes
                .as_ref()
                .and_then(|change_set| {
                    replace_matching(collection, id, |todo| todo.apply(change_set))
                })
                .map_or(Undo::Nothing, Undo::Restore)
        });
        debug!(action = "update", todo_id = %id, "optimistic change applied");

        match self.commands.update_todo(id, request).await {
            Ok(updated) => {
                pending.settle(|collection| {
                    replace_matching(collection, id, |_| updated.clone());
                });
                Ok(updated)
            }
            Err(err) => {
                pending.fail(&err, "update", UPDATE_FAILED);
                Err(err)
            }
        }
    }

    /// Deletes a todo, removing it from the collection immediately.
    ///
    /// # Errors
    ///
    /// Returns the command's [`TodoServiceError`] after putting the todo back
    /// where it was.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<Todo> {
        let _claim = self.in_flight.acquire(id).await;
        let pending = self.speculate(|collection| {
            collection
                .iter()
                .position(|todo| todo.has_id(id))
                .map_or(Undo::Nothing, |index| Undo::Reinsert {
                    index,
                    todo: collection.remove(index),
                })
        });
        debug!(action = "delete", todo_id = %id, "optimistic change applied");

        match self.commands.delete_todo(id).await {
            Ok(deleted) => {
                pending.settle(|_| {});
                Ok(deleted)
            }
            Err(err) => {
                pending.fail(&err, "delete", DELETE_FAILED);
                Err(err)
            }
        }
    }

    /// Flips the completion flag of a todo, showing the result immediately.
    ///
    /// # Errors
    ///
    /// Returns the command's [`TodoServiceError`] after restoring the todo.
    pub async fn toggle(&self, id: TodoId) -> TodoServiceResult<Todo> {
        let _claim = self.in_flight.acquire(id).await;
        let pending = self.speculate(|collection| {
            replace_matching(collection, id, Todo::toggled).map_or(Undo::Nothing, Undo::Restore)
        });
        debug!(action = "toggle", todo_id = %id, "optimistic change applied");

        match self.commands.toggle_todo(id).await {
            Ok(toggled) => {
                pending.settle(|collection| {
                    replace_matching(collection, id, |_| toggled.clone());
                });
                Ok(toggled)
            }
            Err(err) => {
                pending.fail(&err, "toggle", TOGGLE_FAILED);
                Err(err)
            }
        }
    }

    /// Applies the local guess and enters loading.
    fn speculate(&self, change: impl FnOnce(&mut Vec<Todo>) -> Undo) -> Speculation<'_, C> {
        let mut undo = Undo::Nothing;
        self.state.send_modify(|state| {
            undo = change(&mut state.collection);
            state.status = StoreStatus::Loading;
            state.error = None;
        });
        Speculation {
            store: self,
            undo: Some(undo),
        }
    }
}

/// How to take back one action's local change.
#[derive(Debug)]
enum Undo {
    /// Nothing was changed locally.
    Nothing,
    /// Remove the provisional todo inserted by a create.
    Remove(Todo),
    /// Put back the todo as it was before an update or toggle.
    Restore(Todo),
    /// Reinsert a deleted todo at its former position.
    Reinsert { index: usize, todo: Todo },
}

impl Undo {
    fn revert(self, collection: &mut Vec<Todo>) {
        match self {
            Self::Nothing => {}
            Self::Remove(provisional) => {
                if let Some(position) = collection.iter().position(|todo| *todo == provisional) {
                    collection.remove(position);
                }
            }
            Self::Restore(previous) => {
                if let Some(id) = previous.id() {
                    replace_matching(collection, id, move |_| previous);
                }
            }
            Self::Reinsert { index, todo } => {
                let present = todo
                    .id()
                    .is_some_and(|id| collection.iter().any(|other| other.has_id(id)));
                if !present {
                    collection.insert(index.min(collection.len()), todo);
                }
            }
        }
    }
}

/// Local change waiting for its remote outcome.
///
/// Dropped without [`Speculation::settle`] or [`Speculation::fail`], it
/// undoes the change and returns a loading store to idle.
struct Speculation<'a, C>
where
    C: Clock + Send + Sync,
{
    store: &'a TodoStore<C>,
    undo: Option<Undo>,
}

impl<C> Speculation<'_, C>
where
    C: Clock + Send + Sync,
{
    /// Reconciles the collection with a successful result.
    fn settle(mut self, reconcile: impl FnOnce(&mut Vec<Todo>)) {
        self.undo = None;
        self.store.state.send_modify(|state| {
            reconcile(&mut state.collection);
            state.status = StoreStatus::Succeeded;
        });
    }

    /// Undoes the local change and records the failure.
    fn fail(mut self, err: &TodoServiceError, action: &'static str, fallback: &str) {
        warn!(action, error = %err, "remote command failed, local change rolled back");
        let undo = self.undo.take();
        let message = err.user_message().unwrap_or_else(|| fallback.to_owned());
        self.store.state.send_modify(|state| {
            if let Some(undo) = undo {
                undo.revert(&mut state.collection);
            }
            state.status = StoreStatus::Failed;
            state.error = Some(message);
        });
    }
}

impl<C> Drop for Speculation<'_, C>
where
    C: Clock + Send + Sync,
{
    fn drop(&mut self) {
        let Some(undo) = self.undo.take() else {
            return;
        };
        warn!("store action cancelled, local change undone");
        self.store.state.send_modify(|state| {
            undo.revert(&mut state.collection);
            if state.status == StoreStatus::Loading {
                state.status = StoreStatus::Idle;
            }
        });
    }
}

/// Replaces the todo carrying `id` with `next(todo)` and returns the todo it
/// replaced; no-op when absent.
fn replace_matching(
    collection: &mut [Todo],
    id: TodoId,
    next: impl FnOnce(&Todo) -> Todo,
) -> Option<Todo> {
    let slot = collection.iter_mut().find(|todo| todo.has_id(id))?;
    let replacement = next(slot);
    Some(std::mem::replace(slot, replacement))
}
