//! Cache Store Module
//!
//! Process-local key-value map with per-key TTL and glob-pattern removal.
//! Not thread-safe on its own; [`MemoryCache`](super::MemoryCache) wraps it
//! in a lock.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{glob_match, CacheEntry};

// == Cache Store ==
/// TTL-aware key-value storage.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value, overwriting any previous entry and resetting its TTL.
    pub fn set(&mut self, key: String, value: Vec<u8>, ttl: Option<Duration>) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Expired entries are removed on the way and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Remove ==
    /// Removes an entry by key. Returns whether a live entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries
            .remove(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    // == Remove Matching ==
    /// Removes every entry whose key matches the glob `pattern`.
    ///
    /// Returns the number of keys removed.
    pub fn remove_matching(&mut self, pattern: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !glob_match(pattern, key));
        before - self.entries.len()
    }

    // == Contains ==
    /// Checks for a live entry without touching it.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const LONG: Option<Duration> = Some(Duration::from_secs(300));

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), b"value1".to_vec(), LONG);

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_remove() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), b"value1".to_vec(), LONG);
        assert!(store.remove("key1"));

        assert!(store.is_empty());
        assert!(store.get("key1").is_none());
        assert!(!store.remove("key1"));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), b"value1".to_vec(), LONG);
        store.set("key1".to_string(), b"value2".to_vec(), LONG);

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new();

        store.set(
            "key1".to_string(),
            b"value1".to_vec(),
            Some(Duration::from_millis(50)),
        );
        assert!(store.contains("key1"));

        sleep(Duration::from_millis(80));

        assert!(!store.contains("key1"));
        assert!(store.get("key1").is_none());
        // Lazily dropped on lookup
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_remove_matching() {
        let mut store = CacheStore::new();

        store.set("products:page:1".to_string(), b"a".to_vec(), LONG);
        store.set("products:page:2".to_string(), b"b".to_vec(), LONG);
        store.set("product:1".to_string(), b"c".to_vec(), LONG);

        assert_eq!(store.remove_matching("products:*"), 2);
        assert_eq!(store.len(), 1);
        assert!(store.contains("product:1"));
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new();

        store.set(
            "key1".to_string(),
            b"value1".to_vec(),
            Some(Duration::from_millis(50)),
        );
        store.set("key2".to_string(), b"value2".to_vec(), LONG);
        store.set("key3".to_string(), b"value3".to_vec(), None);

        sleep(Duration::from_millis(80));

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 2);
        assert!(store.get("key2").is_some());
        assert!(store.get("key3").is_some());
    }
}
