//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! [`staffdir_core::storage::PersonStore`], selected at compile time via
//! feature flags, plus the cache-aside decorator shared by all backends.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory backend for testing and demos
//! - `sqlite`: SQLite backend using `rusqlite` and `tokio-rusqlite`
//!
//! The storage features are mutually exclusive - only one backend can be
//! enabled at a time.

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
