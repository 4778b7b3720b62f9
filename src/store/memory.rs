//! In-memory product store.
//!
//! Rows live in a `BTreeMap` behind a tokio `RwLock`. Ids are assigned from a
//! monotonically increasing counter and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::Product;
use crate::store::ProductStore;

#[derive(Debug, Default)]
struct Rows {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

impl Rows {
    /// Rejects a SKU already used by another row (deleted rows included).
    fn check_sku(&self, sku: Option<&str>, own_id: i64) -> StoreResult<()> {
        let Some(sku) = sku else {
            return Ok(());
        };
        let taken = self
            .products
            .values()
            .any(|p| p.id != own_id && p.sku.as_deref() == Some(sku));
        if taken {
            return Err(StoreError::Conflict(format!(
                "SKU '{}' is already in use",
                sku
            )));
        }
        Ok(())
    }
}

/// Product store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: RwLock<Rows>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let rows = self.rows.read().await;
        Ok(rows.products.get(&id).cloned())
    }

    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let rows = self.rows.read().await;
        Ok(rows.products.values().cloned().collect())
    }

    async fn add(&self, mut product: Product) -> StoreResult<Product> {
        let mut rows = self.rows.write().await;
        rows.check_sku(product.sku.as_deref(), 0)?;

        rows.last_id += 1;
        product.id = rows.last_id;
        rows.products.insert(product.id, product.clone());

        debug!("Inserted product row {}", product.id);
        Ok(product)
    }

    async fn update(&self, product: Product) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        // Soft-deleted rows are final; a stale copy must not revive them
        let live = rows.products.get(&product.id).is_some_and(|p| !p.is_deleted);
        if !live {
            return Err(StoreError::NotFound(product.id));
        }
        rows.check_sku(product.sku.as_deref(), product.id)?;

        rows.products.insert(product.id, product);
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        match rows.products.get_mut(&id) {
            Some(product) if !product.is_deleted => {
                product.is_deleted = true;
                product.updated_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(StoreError::NotFound(id)),
        }
    }

    async fn exists(&self, id: i64) -> StoreResult<bool> {
        let rows = self.rows.read().await;
        Ok(rows.products.get(&id).is_some_and(|p| !p.is_deleted))
    }
}
