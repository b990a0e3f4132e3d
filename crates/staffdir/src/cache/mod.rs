//! Cache backend implementations.
//!
//! Concrete implementations of [`staffdir_core::cache::Cache`], selected at
//! compile time via feature flags.

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::MemoryCache;
