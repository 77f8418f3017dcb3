use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-memory response cache
///
/// Values are stored JSON-serialized so any serde type can share one cache.
/// Entries expire after the configured TTL; the service runs single-instance,
/// so no shared tier sits behind this one.
pub struct CacheManager {
    cache: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a new cache manager with the given capacity and TTL
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache, ttl_secs }
    }

    /// Get a value from the cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.cache.get(key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in the cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.cache.insert(key.to_string(), bytes).await;
        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Delete a single entry
    pub async fn delete(&self, key: &str) {
        self.cache.invalidate(key).await;
    }

    /// Drop every cached entry
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
        tracing::debug!("Cache invalidated");
    }

    /// Configured time-to-live in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a discovery query
    ///
    /// Search text is lowercased so equivalent queries share an entry; the
    /// filter itself is case-insensitive over the same input.
    pub fn discover(category: &str, search: &str, limit: usize) -> String {
        format!("discover:{}:{}:{}", category, search.to_lowercase(), limit)
    }

    /// Build a cache key for recommendations
    pub fn recommendations(viewer_id: &str, limit: usize) -> String {
        format!("recommendations:{}:{}", viewer_id, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = CacheManager::new(100, 60);

        cache.set("test_key", &"test_value").await.unwrap();
        let result: String = cache.get("test_key").await.unwrap();
        assert_eq!(result, "test_value");

        cache.delete("test_key").await;
        assert!(cache.get::<String>("test_key").await.is_err());
    }

    #[tokio::test]
    async fn test_cache_roundtrips_structs() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Payload {
            count: usize,
        }

        let cache = CacheManager::new(100, 60);
        cache.set("payload", &Payload { count: 3 }).await.unwrap();

        let back: Payload = cache.get("payload").await.unwrap();
        assert_eq!(back, Payload { count: 3 });
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::discover("All", "", 20), "discover:All::20");
        assert_eq!(
            CacheKey::discover("HIIT", "Alex", 20),
            "discover:HIIT:alex:20"
        );
        assert_eq!(
            CacheKey::recommendations("user123", 10),
            "recommendations:user123:10"
        );
    }
}
