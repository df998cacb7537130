//! Observable store state and the views derived from it.

use crate::todo::domain::{Todo, TodoFilter, TodoStats};

/// Progress of the most recent store action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StoreStatus {
    /// No action has run since creation or since the last error was cleared.
    #[default]
    Idle,
    /// An action is waiting for its remote result.
    Loading,
    /// The most recent action completed.
    Succeeded,
    /// The most recent action failed.
    Failed,
}

/// Snapshot of everything a consumer renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStoreState {
    pub(super) collection: Vec<Todo>,
    pub(super) filter: TodoFilter,
    pub(super) status: StoreStatus,
    pub(super) error: Option<String>,
}

impl TodoStoreState {
    /// Returns the todo collection, most recently created first.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.collection
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> TodoFilter {
        self.filter
    }

    /// Returns the status of the most recent action.
    #[must_use]
    pub const fn status(&self) -> StoreStatus {
        self.status
    }

    /// Returns the message describing the last failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the todos passing the active filter, in collection order.
    #[must_use]
    pub fn filtered(&self) -> Vec<Todo> {
        self.collection
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .cloned()
            .collect()
    }

    /// Counts the todos in the collection.
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        TodoStats::from_todos(&self.collection)
    }

    /// Returns `true` while an action is waiting for its remote result.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == StoreStatus::Loading
    }

    /// Returns `true` when no action has run or the last error was cleared.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.status == StoreStatus::Idle
    }

    /// Returns `true` when the most recent action failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.status == StoreStatus::Failed
    }
}
