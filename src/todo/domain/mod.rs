//! Domain model for todo management.
//!
//! Entities are immutable values: every transition builds a new [`Todo`]
//! so snapshots taken by the store are never affected by later edits.

mod changes;
mod error;
mod filter;
mod ids;
pub mod ordering;
mod priority;
mod specification;
mod stats;
mod title;
mod todo;

pub use changes::TodoChanges;
pub use error::TodoDomainError;
pub use filter::TodoFilter;
pub use ids::TodoId;
pub use priority::Priority;
pub use specification::TodoSpecification;
pub use stats::TodoStats;
pub use title::TodoTitle;
pub use todo::{NewTodo, PersistedTodoData, Todo};
