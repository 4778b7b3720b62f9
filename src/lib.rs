//! Product Catalog - CRUD product service with a cache-aside read path
//!
//! Reads go through the cache and fall back to the store on a miss; writes
//! go to the store and invalidate the cached views they affect.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::ProductService;
pub use tasks::spawn_cleanup_task;
