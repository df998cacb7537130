//! Port contracts for todo management.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
