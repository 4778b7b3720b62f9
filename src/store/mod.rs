//! Product Store Module
//!
//! Durable record storage for products, behind the [`ProductStore`] trait so
//! the orchestrator never depends on a concrete backend.

mod memory;

pub use memory::MemoryProductStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::Product;

/// Storage contract consumed by the product service.
///
/// `get_by_id` and `get_all` return soft-deleted rows as well; hiding them is
/// the caller's job. `exists` only reports live (non-deleted) rows.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Looks up a product by id, deleted or not.
    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Product>>;

    /// Returns every stored product.
    async fn get_all(&self) -> StoreResult<Vec<Product>>;

    /// Inserts a product and returns it with its assigned id.
    async fn add(&self, product: Product) -> StoreResult<Product>;

    /// Replaces the stored row with the same id.
    async fn update(&self, product: Product) -> StoreResult<()>;

    /// Soft-deletes a product; the row is kept.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Whether a live product with this id exists.
    async fn exists(&self, id: i64) -> StoreResult<bool>;
}
