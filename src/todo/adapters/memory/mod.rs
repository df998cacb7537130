//! In-memory adapters for todo persistence.

mod repository;

pub use repository::InMemoryTodoRepository;
