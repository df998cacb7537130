//! Service-level errors for todo use cases.

use crate::todo::{
    domain::{TodoDomainError, TodoId},
    ports::TodoRepositoryError,
};
use thiserror::Error;

/// Errors raised by todo command and query services.
#[derive(Debug, Clone, Error)]
pub enum TodoServiceError {
    /// Input failed a todo invariant before any persistence attempt.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),

    /// The target todo has no record at command time.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

impl TodoServiceError {
    /// Returns the message to show a user, when the failure carries one.
    ///
    /// Validation, missing-record and server-rejection failures describe
    /// themselves. Transport and storage failures return `None` so callers
    /// substitute their own wording.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(_)
            | Self::NotFound(_)
            | Self::Repository(
                TodoRepositoryError::NotFound(_) | TodoRepositoryError::Rejected(_),
            ) => Some(self.to_string()),
            Self::Repository(
                TodoRepositoryError::Duplicate(_)
                | TodoRepositoryError::Transport(_)
                | TodoRepositoryError::Corrupt(_)
                | TodoRepositoryError::Persistence(_),
            ) => None,
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;
