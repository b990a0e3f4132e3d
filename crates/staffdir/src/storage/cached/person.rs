//! Cached person store decorator.
//!
//! Wraps a `PersonStore` implementation with the cache-aside pattern.

use std::sync::Arc;

use async_trait::async_trait;

use staffdir_core::cache::{deserialize_person, person_key, serialize_person, Cache};
use staffdir_core::person::Person;
use staffdir_core::storage::{PersonStore, Result};

/// Cache-aside decorator over an authoritative person store.
///
/// Reads check the cache first; a miss falls through to the wrapped store
/// and populates the cache on the way out. A missing person propagates
/// without writing to the cache, and the store is queried at most once per
/// call. Concurrent misses for the same reference may each query the store
/// and each write the cache; the last write wins.
///
/// # Type Parameters
///
/// * `R` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedPersonStore<R, C>
where
    R: PersonStore,
    C: Cache,
{
    store: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> CachedPersonStore<R, C>
where
    R: PersonStore,
    C: Cache,
{
    /// Creates a new cached person store.
    pub fn new(store: Arc<R>, cache: Arc<C>) -> Self {
        Self { store, cache }
    }
}

#[async_trait]
impl<R, C> PersonStore for CachedPersonStore<R, C>
where
    R: PersonStore + 'static,
    C: Cache + 'static,
{
    async fn get_person(&self, reference: &str) -> Result<Person> {
        let cache_key = person_key(reference);

        // Check cache first
        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(person) = deserialize_person(&bytes) {
                tracing::trace!(%reference, "Cache hit for person");
                return Ok(person);
            }
            // Undecodable bytes count as a miss
            tracing::warn!(%reference, "Cache person deserialization failed");
        }

        // Cache miss - fetch from the authoritative store. A NotFound
        // propagates from here without any cache write.
        tracing::trace!(%reference, "Cache miss for person");
        let person = self.store.get_person(reference).await?;

        // Populate the cache; a failed write degrades to serving from the
        // store and the next read retries population.
        match serialize_person(&person) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&cache_key, &bytes).await {
                    tracing::warn!(%reference, error = %err, "Failed to cache person");
                }
            }
            Err(err) => {
                tracing::warn!(%reference, error = %err, "Failed to encode person for cache");
            }
        }

        Ok(person)
    }
}
