//! Fault-absorbing typed cache adapter.
//!
//! Every operation here succeeds from the caller's point of view. Backend
//! and serialization faults are logged, counted and turned into a miss
//! (reads), `false` (`exists`) or a no-op (writes and removals), so the store
//! stays reachable while the cache is down.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{CacheBackend, CacheCounters, CacheStats};
use crate::error::CacheResult;

/// JSON-typed view over a [`CacheBackend`].
#[derive(Clone)]
pub struct ProductCache {
    backend: Arc<dyn CacheBackend>,
    counters: Arc<CacheCounters>,
}

impl ProductCache {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend,
            counters: Arc::new(CacheCounters::new()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    // == Get ==
    /// Returns the cached value, or `None` on miss, fault or undecodable bytes.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.fetch(key).await {
            Ok(Some(value)) => {
                debug!("Cache hit: {}", key);
                self.counters.record_hit();
                Some(value)
            }
            Ok(None) => {
                debug!("Cache miss: {}", key);
                self.counters.record_miss();
                None
            }
            Err(err) => {
                warn!("Error getting value from cache for key {}: {}", key, err);
                self.counters.record_error();
                self.counters.record_miss();
                None
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        let Some(bytes) = self.backend.get(key).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    // == Set ==
    /// Stores `value` as JSON with the given TTL.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        match self.store(key, value, ttl).await {
            Ok(()) => debug!("Cached {} for {}s", key, ttl.as_secs()),
            Err(err) => {
                warn!("Error setting value in cache for key {}: {}", key, err);
                self.counters.record_error();
            }
        }
    }

    async fn store<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) -> CacheResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, bytes, ttl).await
    }

    // == Remove ==
    pub async fn remove(&self, key: &str) {
        match self.backend.remove(key).await {
            Ok(()) => {
                debug!("Invalidated {}", key);
                self.counters.record_invalidation();
            }
            Err(err) => {
                warn!("Error removing value from cache for key {}: {}", key, err);
                self.counters.record_error();
            }
        }
    }

    // == Remove By Pattern ==
    pub async fn remove_by_pattern(&self, pattern: &str) {
        match self.backend.remove_by_pattern(pattern).await {
            Ok(removed) => {
                debug!("Invalidated {} keys matching {}", removed, pattern);
                self.counters.record_invalidation();
            }
            Err(err) => {
                warn!("Error removing pattern from cache {}: {}", pattern, err);
                self.counters.record_error();
            }
        }
    }

    // == Exists ==
    /// Whether a live entry exists; `false` when the backend is unreachable.
    pub async fn exists(&self, key: &str) -> bool {
        match self.backend.exists(key).await {
            Ok(exists) => exists,
            Err(err) => {
                warn!("Error checking if key exists in cache {}: {}", key, err);
                self.counters.record_error();
                false
            }
        }
    }
}
