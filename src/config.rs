//! Environment-driven configuration.
//!
//! # Environment Variables
//!
//! - `TODO_STORAGE_MODE`: `memory` (default) | `postgres` | `remote`
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when
//!   `TODO_STORAGE_MODE=postgres`)
//! - `TODO_API_URL`: remote todo service root (required when
//!   `TODO_STORAGE_MODE=remote`)
//! - `TODO_LOG`: default tracing directive when `RUST_LOG` is unset
//!   (defaults to `info`)

use std::str::FromStr;
use thiserror::Error;

/// Variable selecting the storage mode.
pub const STORAGE_MODE_VAR: &str = "TODO_STORAGE_MODE";
/// Variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Variable holding the remote service root URL.
pub const API_URL_VAR: &str = "TODO_API_URL";
/// Variable holding the default tracing directive.
pub const LOG_FILTER_VAR: &str = "TODO_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The storage mode is not recognised.
    #[error("invalid storage mode '{0}', expected memory, postgres or remote")]
    InvalidStorageMode(String),

    /// A variable required by the selected mode is unset or blank.
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),
}

/// Storage technology behind the repository port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// Process-local storage.
    #[default]
    Memory,
    /// `PostgreSQL` storage.
    Postgres,
    /// Remote todo service over HTTP.
    Remote,
}

impl FromStr for StorageMode {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in_memory" | "inmemory" => Ok(Self::Memory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "remote" | "http" => Ok(Self::Remote),
            _ => Err(ConfigurationError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Fully resolved storage backend, carrying what its mode needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local storage.
    Memory,
    /// `PostgreSQL` storage at the given URL.
    Postgres {
        /// Connection URL.
        database_url: String,
    },
    /// Remote todo service rooted at the given URL.
    Remote {
        /// Service root URL.
        base_url: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Storage backend behind the repository port.
    pub backend: StorageBackend,
    /// Default tracing directive.
    pub log_filter: String,
}

impl TodoConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the storage mode is unknown or a
    /// variable it requires is missing.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the storage mode is unknown or a
    /// variable it requires is missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mode = read(STORAGE_MODE_VAR)
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();

        let backend = match mode {
            StorageMode::Memory => StorageBackend::Memory,
            StorageMode::Postgres => StorageBackend::Postgres {
                database_url: read(DATABASE_URL_VAR)
                    .ok_or(ConfigurationError::MissingVariable(DATABASE_URL_VAR))?,
            },
            StorageMode::Remote => StorageBackend::Remote {
                base_url: read(API_URL_VAR)
                    .ok_or(ConfigurationError::MissingVariable(API_URL_VAR))?,
            },
        };

        Ok(Self {
            backend,
            log_filter: read(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        })
    }
}
