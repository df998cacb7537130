//! HTTP adapters talking to a remote todo service.
//!
//! Every response is wrapped in an [`ApiEnvelope`]. A failed request whose
//! envelope carries an `error` surfaces that text unchanged.

mod dto;
mod envelope;
mod repository;

pub use dto::{TodoChangesDto, TodoDto};
pub use envelope::ApiEnvelope;
pub use repository::RemoteTodoRepository;
