//! In-memory cache implementation.
//!
//! Thread-safe byte store using tokio synchronization primitives. Entries
//! live for the lifetime of the process: the read path warms the cache
//! lazily and nothing expires, evicts or invalidates.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use staffdir_core::cache::{Cache, Result};

/// In-memory cache implementation.
///
/// Thread-safe cache using `Arc<RwLock<HashMap>>` for concurrent access.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryCache {
    /// Creates a new empty in-memory cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();
        let key = "test:key";
        let value = b"test value";

        cache.set(key, value).await.unwrap();
        let result = cache.get(key).await.unwrap();

        assert_eq!(result, Some(value.to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new();
        let result = cache.get("nonexistent:key").await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_overwrite_value() {
        let cache = MemoryCache::new();
        let key = "test:overwrite";

        cache.set(key, b"first").await.unwrap();
        cache.set(key, b"second").await.unwrap();

        let result = cache.get(key).await.unwrap();
        assert_eq!(result, Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = MemoryCache::new();

        cache.set("person:a", b"a").await.unwrap();
        cache.set("person:b", b"b").await.unwrap();

        assert_eq!(cache.get("person:a").await.unwrap(), Some(b"a".to_vec()));
        assert_eq!(cache.get("person:b").await.unwrap(), Some(b"b".to_vec()));
    }
}
