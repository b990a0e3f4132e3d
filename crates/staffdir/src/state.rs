//! Application state wired through an explicit composition root.
//!
//! Dependencies are constructed here - authoritative store, cache,
//! cache-aside decorator, interactor - and handed to the router as shared
//! state. Backend combinations are selected at compile time via feature
//! flags.

use std::sync::Arc;

use staffdir_core::storage::PersonStore;
use staffdir_core::usecase::GetPerson;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

// Cache features
#[cfg(not(feature = "memory"))]
compile_error!("Must enable the 'memory' cache feature");

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The person read use case, backed by the cache-aside store.
    pub get_person: Arc<GetPerson>,
}

impl AppState {
    /// Creates state over an already-built store.
    ///
    /// Used by the feature-gated constructors below and directly by tests
    /// that bring their own store.
    pub fn from_store(store: Arc<dyn PersonStore>) -> Self {
        Self {
            get_person: Arc::new(GetPerson::new(store)),
        }
    }
}

// ============================================================================
// Composition roots for the backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::demo_data;
    use crate::storage::cached::CachedPersonStore;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage and in-memory cache,
        /// seeded with the demo directory.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            demo_data::seed(&store).await;

            let cache = Arc::new(MemoryCache::new());
            let cached = Arc::new(CachedPersonStore::new(store, cache));

            Ok(Self::from_store(cached))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::CachedPersonStore;
    use crate::storage::SqliteStore;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteStore::new(&config.sqlite_path).await?);

            let cache = Arc::new(MemoryCache::new());
            let cached = Arc::new(CachedPersonStore::new(store, cache));

            Ok(Self::from_store(cached))
        }
    }
}
