//! Per-identifier serialization of store mutations.

use crate::todo::domain::TodoId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of mutations currently running against each todo.
///
/// Mutations on the same identifier run one at a time; mutations on
/// different identifiers never wait for each other.
#[derive(Debug, Default)]
pub(super) struct InFlightIds {
    locks: Mutex<HashMap<TodoId, Arc<AsyncMutex<()>>>>,
}

impl InFlightIds {
    /// Waits until no other mutation holds `id`, then claims it.
    pub(super) async fn acquire(&self, id: TodoId) -> InFlightGuard<'_> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(id).or_default())
        };
        let permit = lock.lock_owned().await;
        InFlightGuard {
            registry: self,
            id,
            permit: Some(permit),
        }
    }

    #[cfg(test)]
    pub(super) fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Claim on a todo identifier, released on drop.
pub(super) struct InFlightGuard<'a> {
    registry: &'a InFlightIds,
    id: TodoId,
    permit: Option<OwnedMutexGuard<()>>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        drop(self.permit.take());
        let mut locks = self
            .registry
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Only the registry still references the lock: nobody is waiting.
        let idle = locks
            .get(&self.id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            locks.remove(&self.id);
        }
    }
}
