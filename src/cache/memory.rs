//! In-process cache backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheBackend, CacheStore};
use crate::error::CacheResult;

/// [`CacheBackend`] over a locked [`CacheStore`].
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    /// Number of stored entries, expired ones not yet purged included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        // Write lock: expired entries are dropped on lookup
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheResult<()> {
        self.store
            .write()
            .await
            .set(key.to_string(), value, Some(ttl));
        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        self.store.write().await.remove(key);
        Ok(())
    }

    async fn remove_by_pattern(&self, pattern: &str) -> CacheResult<u64> {
        Ok(self.store.write().await.remove_matching(pattern) as u64)
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        Ok(self.store.read().await.contains(key))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
