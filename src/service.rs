//! Product Service
//!
//! The cache-aside orchestrator. Reads probe the cache, fall back to the
//! store on a miss and populate the cache with a TTL. Writes go to the store
//! first and then invalidate every cached view they may have changed; the
//! write path never populates the cache.
//!
//! Store faults propagate to the caller. Cache faults never do; they are
//! absorbed inside [`ProductCache`].

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::cache::keys::{product_key, product_list_key, product_list_pattern};
use crate::cache::ProductCache;
use crate::error::{StoreError, StoreResult};
use crate::models::{
    CreateProductRequest, PagedResult, Product, ProductResponse, UpdateProductRequest,
};
use crate::query::{self, ProductQuery};
use crate::store::ProductStore;

/// Default TTL for single-product entries.
pub const PRODUCT_TTL: Duration = Duration::from_secs(10 * 60);
/// Default TTL for collection-view entries.
pub const PRODUCT_LIST_TTL: Duration = Duration::from_secs(5 * 60);

/// TTLs applied when populating the cache on a read miss.
#[derive(Debug, Clone, Copy)]
pub struct CacheTtls {
    pub product: Duration,
    pub product_list: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            product: PRODUCT_TTL,
            product_list: PRODUCT_LIST_TTL,
        }
    }
}

/// Mediates every product read and write through the cache.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    cache: ProductCache,
    ttls: CacheTtls,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, cache: ProductCache, ttls: CacheTtls) -> Self {
        Self { store, cache, ttls }
    }

    pub fn cache(&self) -> &ProductCache {
        &self.cache
    }

    // == Read By Id ==
    /// Returns the product, or `None` if it never existed or is soft-deleted.
    ///
    /// Absence is not cached.
    pub async fn get_product(&self, id: i64) -> StoreResult<Option<ProductResponse>> {
        let key = product_key(id);

        if let Some(cached) = self.cache.get::<ProductResponse>(&key).await {
            debug!("Product retrieved from cache: {}", id);
            return Ok(Some(cached));
        }

        let product = match self.store.get_by_id(id).await? {
            Some(product) if !product.is_deleted => product,
            _ => return Ok(None),
        };

        let response = ProductResponse::from(product);
        self.cache.set(&key, &response, self.ttls.product).await;

        debug!("Product retrieved from store and cached: {}", id);
        Ok(Some(response))
    }

    // == Read Collection ==
    /// Returns one page of active, non-deleted products matching `query`.
    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> StoreResult<PagedResult<ProductResponse>> {
        let key = product_list_key(query);

        if let Some(cached) = self.cache.get::<PagedResult<ProductResponse>>(&key).await {
            debug!("Products retrieved from cache: {}", key);
            return Ok(cached);
        }

        let listed: Vec<Product> = self
            .store
            .get_all()
            .await?
            .into_iter()
            .filter(Product::is_listed)
            .collect();

        let page = query::paginate(listed, query).map(ProductResponse::from);
        self.cache.set(&key, &page, self.ttls.product_list).await;

        debug!("Products retrieved from store and cached: {}", key);
        Ok(page)
    }

    // == Create ==
    pub async fn create_product(
        &self,
        request: &CreateProductRequest,
    ) -> StoreResult<ProductResponse> {
        let product = Product {
            id: 0,
            name: request.name.clone(),
            description: request.description.clone(),
            price: request.price,
            stock: request.stock,
            category: request.category.clone(),
            sku: request.sku.clone(),
            is_active: true,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: None,
        };

        let created = self.store.add(product).await?;

        // A new product can show up in any collection view
        self.cache.remove_by_pattern(&product_list_pattern()).await;

        info!("Product created with ID: {}", created.id);
        Ok(created.into())
    }

    // == Update ==
    /// Replaces every mutable field. Returns `None` without touching the
    /// store or the cache when no live product has this id.
    pub async fn update_product(
        &self,
        id: i64,
        request: &UpdateProductRequest,
    ) -> StoreResult<Option<ProductResponse>> {
        let mut product = match self.store.get_by_id(id).await? {
            Some(product) if !product.is_deleted => product,
            _ => return Ok(None),
        };

        product.name = request.name.clone();
        product.description = request.description.clone();
        product.price = request.price;
        product.stock = request.stock;
        product.category = request.category.clone();
        product.sku = request.sku.clone();
        product.is_active = request.is_active;
        product.updated_at = Some(Utc::now());

        match self.store.update(product.clone()).await {
            Ok(()) => {}
            // Deleted between the lookup and the write
            Err(StoreError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(err),
        }

        self.invalidate(id).await;

        info!("Product updated with ID: {}", id);
        Ok(Some(product.into()))
    }

    // == Soft Delete ==
    /// Returns `false` without touching the store or the cache when no live
    /// product has this id.
    pub async fn delete_product(&self, id: i64) -> StoreResult<bool> {
        if !self.store.exists(id).await? {
            return Ok(false);
        }

        match self.store.delete(id).await {
            Ok(()) => {}
            Err(StoreError::NotFound(_)) => return Ok(false),
            Err(err) => return Err(err),
        }

        self.invalidate(id).await;

        info!("Product deleted with ID: {}", id);
        Ok(true)
    }

    /// Drops every collection view plus the single-product entry for `id`.
    async fn invalidate(&self, id: i64) {
        self.cache.remove_by_pattern(&product_list_pattern()).await;
        self.cache.remove(&product_key(id)).await;
    }
}
