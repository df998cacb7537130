//! Completion filter applied to todo collections.

use super::Todo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which todos a view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoFilter {
    /// Every todo.
    #[default]
    All,
    /// Todos that are not completed.
    Active,
    /// Completed todos.
    Completed,
}

impl TodoFilter {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns whether the todo passes this filter.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.is_completed(),
            Self::Completed => todo.is_completed(),
        }
    }
}

/// Unrecognized values map to [`TodoFilter::All`].
impl From<&str> for TodoFilter {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
