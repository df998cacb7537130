//! Command and query use cases for todo management.
//!
//! Commands validate their input before touching persistence and return the
//! canonical post-operation todo, so callers always have a value to
//! reconcile against. Queries never write.

mod command;
mod error;
mod query;
mod requests;
mod use_cases;

pub use command::TodoCommandService;
pub use error::{TodoServiceError, TodoServiceResult};
pub use query::TodoQueryService;
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use use_cases::{TodoCommands, TodoQueries};
