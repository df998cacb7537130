//! Repository adapters and backend composition.

pub mod factory;
pub mod memory;
pub mod postgres;
pub mod remote;
