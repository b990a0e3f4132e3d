//! SQLite storage backend implementation.
//!
//! Implements the person store using `rusqlite` for synchronous operations
//! and `tokio-rusqlite` for async wrapping.

mod repository;
mod schema;

pub use repository::SqliteStore;
