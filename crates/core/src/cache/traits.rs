use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
///
/// The cache stores opaque bytes; entity encoding lives in the pure
/// functions of [`super::serialization`]. There is no expiry and no
/// invalidation surface: the cache is warmed lazily by readers and entries
/// live until the process does.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}
