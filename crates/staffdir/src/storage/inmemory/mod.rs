//! In-memory storage backend for testing and demos.
//!
//! Stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and development scenarios where persistence is not required.

mod repository;

pub use repository::InMemoryStore;
