//! Cache Module
//!
//! Cache-aside support for product reads: a byte-level [`CacheBackend`]
//! (in-memory or Redis), key construction, and [`ProductCache`], the typed
//! adapter that absorbs backend faults.

mod backend;
mod entry;
pub mod keys;
mod memory;
mod pattern;
mod product_cache;
mod redis_backend;
mod stats;
mod store;


// Re-export public types
pub use backend::CacheBackend;
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use pattern::glob_match;
pub use product_cache::ProductCache;
pub use redis_backend::RedisCache;
pub use stats::{CacheCounters, CacheStats};
pub use store::CacheStore;
