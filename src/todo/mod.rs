//! Todo list management for Tallyo.
//!
//! The module is split along hexagonal boundaries:
//!
//! - Domain types and ordering rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command and query use cases in [`services`]
//! - The optimistic mutation store in [`store`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;
