//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which cache backend the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackendKind {
    /// Process-local TTL map, swept by a background task
    Memory,
    /// External Redis server
    Redis,
}

impl FromStr for CacheBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(CacheBackendKind::Memory),
            "redis" => Ok(CacheBackendKind::Redis),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Cache backend selection
    pub cache_backend: CacheBackendKind,
    /// Redis connection URL, used when `cache_backend` is `Redis`
    pub redis_url: String,
    /// TTL in seconds for single-product entries
    pub product_ttl: u64,
    /// TTL in seconds for paginated/filtered list entries
    pub product_list_ttl: u64,
    /// Interval in seconds between sweeps of the in-memory cache
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_BACKEND` - `memory` or `redis` (default: memory)
    /// - `REDIS_URL` - Redis URL (default: redis://127.0.0.1:6379)
    /// - `PRODUCT_CACHE_TTL` - single product TTL in seconds (default: 600)
    /// - `PRODUCT_LIST_CACHE_TTL` - list TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - in-memory sweep frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_backend: env_or("CACHE_BACKEND", defaults.cache_backend),
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            product_ttl: env_or("PRODUCT_CACHE_TTL", defaults.product_ttl),
            product_list_ttl: env_or("PRODUCT_LIST_CACHE_TTL", defaults.product_list_ttl),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    pub fn product_ttl(&self) -> Duration {
        Duration::from_secs(self.product_ttl)
    }

    pub fn product_list_ttl(&self) -> Duration {
        Duration::from_secs(self.product_list_ttl)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_backend: CacheBackendKind::Memory,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            product_ttl: 600,
            product_list_ttl: 300,
            cleanup_interval: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_backend, CacheBackendKind::Memory);
        assert_eq!(config.product_ttl(), Duration::from_secs(600));
        assert_eq!(config.product_list_ttl(), Duration::from_secs(300));
        assert_eq!(config.cleanup_interval, 30);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_BACKEND");
        env::remove_var("REDIS_URL");
        env::remove_var("PRODUCT_CACHE_TTL");
        env::remove_var("PRODUCT_LIST_CACHE_TTL");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_backend, CacheBackendKind::Memory);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.product_ttl, 600);
        assert_eq!(config.product_list_ttl, 300);
    }

    #[test]
    fn test_cache_backend_parse() {
        assert_eq!("redis".parse(), Ok(CacheBackendKind::Redis));
        assert_eq!(" Memory ".parse(), Ok(CacheBackendKind::Memory));
        assert!("memcached".parse::<CacheBackendKind>().is_err());
    }
}
