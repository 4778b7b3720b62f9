//! Cache Entry Module
//!
//! A single in-memory cache slot: serialized bytes plus an absolute deadline.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A serialized value plus its absolute expiration.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized value bytes
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    /// Creates an entry expiring `ttl` from now (never, if `None`).
    pub fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at =
            ttl.map(|ttl| current_timestamp_ms().saturating_add(ttl.as_millis() as u64));

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// An entry is expired once the clock reaches its deadline, so a zero TTL
    /// is already expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        self.expires_at.is_some_and(|expires| now_ms >= expires)
    }
}

/// Current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_without_ttl_never_expires() {
        let entry = CacheEntry::new(b"value".to_vec(), None);

        assert_eq!(entry.value, b"value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(u64::MAX));
    }

    #[test]
    fn test_entry_deadline_follows_ttl() {
        let before = current_timestamp_ms();
        let entry = CacheEntry::new(b"value".to_vec(), Some(Duration::from_secs(60)));
        let after = current_timestamp_ms();

        let deadline = entry.expires_at.unwrap();
        assert!(deadline >= before + 60_000 && deadline <= after + 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(b"value".to_vec(), Some(Duration::from_millis(50)));
        assert!(!entry.is_expired());

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_zero_ttl_is_already_expired() {
        let entry = CacheEntry::new(Vec::new(), Some(Duration::ZERO));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry {
            value: Vec::new(),
            expires_at: Some(1_000),
        };

        assert!(entry.is_expired_at(1_000), "Entry should be expired at boundary");
        assert!(!entry.is_expired_at(999));
    }
}
