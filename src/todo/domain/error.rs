//! Error types for todo domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is shorter than the minimum length after trimming.
    #[error("todo title must be at least {min} characters, got {actual}")]
    TitleTooShort {
        /// Minimum accepted length.
        min: usize,
        /// Length after trimming.
        actual: usize,
    },

    /// The title is longer than the maximum length after trimming.
    #[error("todo title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length after trimming.
        actual: usize,
    },

    /// The priority value is not one of `low`, `medium` or `high`.
    #[error("invalid priority '{0}', expected low, medium or high")]
    InvalidPriority(String),

    /// The due date is neither an RFC 3339 timestamp nor a calendar date.
    #[error("invalid due date '{0}', expected an RFC 3339 timestamp or YYYY-MM-DD date")]
    InvalidDueDate(String),

    /// The identifier is not a valid todo identifier.
    #[error("invalid todo identifier '{0}'")]
    InvalidTodoId(String),
}
