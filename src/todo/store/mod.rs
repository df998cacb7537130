//! Optimistic mutation store.
//!
//! The store owns the in-memory todo collection consumers render from. Each
//! mutating action applies its change locally before the remote command
//! completes, then reconciles with the canonical result or restores the
//! snapshot taken before the change.

mod in_flight;
mod state;
mod todo_store;

pub use state::{StoreStatus, TodoStoreState};
pub use todo_store::{
    CREATE_FAILED, DELETE_FAILED, LOAD_FAILED, TOGGLE_FAILED, TodoStore, UPDATE_FAILED,
};
