//! Cache backend contract.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheResult;

/// Raw byte-level cache operations.
///
/// Implementations report faults as [`CacheError`](crate::error::CacheError);
/// [`ProductCache`](super::ProductCache) is the layer that absorbs them.
/// An entry whose TTL has elapsed must behave as absent.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Get a value; `Ok(None)` on miss.
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Store a value that expires after `ttl`.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheResult<()>;

    /// Remove a single key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> CacheResult<()>;

    /// Remove every key matching a glob pattern; returns how many went.
    async fn remove_by_pattern(&self, pattern: &str) -> CacheResult<u64>;

    /// Whether a live entry exists for `key`.
    async fn exists(&self, key: &str) -> CacheResult<bool>;

    /// Short backend name for logs and the health endpoint.
    fn name(&self) -> &'static str;
}
