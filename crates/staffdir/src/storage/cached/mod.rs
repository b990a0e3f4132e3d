//! Cached store decorators.
//!
//! This module provides decorator implementations that wrap the store trait
//! with cache-aside behavior: reads check the cache first, and on miss fetch
//! from the authoritative store and populate the cache.

mod person;

pub use person::CachedPersonStore;
