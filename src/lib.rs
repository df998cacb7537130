//! Tallyo: optimistic todo-list state management.
//!
//! This crate holds the client-side state of a todo list, applies speculative
//! local changes before remote commands complete, and reconciles or rolls back
//! that speculation once the authoritative outcome is known.
//!
//! # Architecture
//!
//! Tallyo follows hexagonal architecture principles:
//!
//! - **Domain**: Pure entity values and ordering rules
//! - **Ports**: Abstract trait interfaces for persistence and use cases
//! - **Adapters**: Concrete repository implementations (memory, `PostgreSQL`,
//!   remote HTTP)
//! - **Services**: Command and query use cases
//! - **Store**: The optimistic mutation store consumers subscribe to
//!
//! # Modules
//!
//! - [`todo`]: Todo domain, persistence ports, use cases and store
//! - [`config`]: Environment-driven backend configuration
//! - [`telemetry`]: Tracing subscriber bootstrap

pub mod config;
pub mod telemetry;
pub mod todo;
