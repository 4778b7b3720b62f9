//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint. Input is validated here,
//! before the service touches the store or the cache.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::extract::{ValidJson, ValidQuery};
use crate::cache::{CacheBackend, ProductCache};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    CreateProductRequest, HealthResponse, ListProductsParams, PagedResult, ProductResponse,
    StatsResponse, UpdateProductRequest,
};
use crate::service::{CacheTtls, ProductService};
use crate::store::ProductStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
}

impl AppState {
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }

    /// Wires a store and a cache backend together using the configured TTLs.
    pub fn with_backends(
        store: Arc<dyn ProductStore>,
        cache: Arc<dyn CacheBackend>,
        config: &Config,
    ) -> Self {
        let ttls = CacheTtls {
            product: config.product_ttl(),
            product_list: config.product_list_ttl(),
        };
        Self::new(ProductService::new(store, ProductCache::new(cache), ttls))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Product with ID {} not found", id))
}

/// Handler for GET /products
pub async fn list_products_handler(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListProductsParams>,
) -> Result<Json<PagedResult<ProductResponse>>> {
    if let Some(error_msg) = params.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let page = state.service.list_products(&params.into_query()).await?;
    Ok(Json(page))
}

/// Handler for GET /products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>> {
    state
        .service
        .get_product(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Handler for POST /products
///
/// Responds 201 with a `Location` header pointing at the new product.
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateProductRequest>,
) -> Result<impl IntoResponse> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let created = state.service.create_product(&req).await?;
    let location = format!("/products/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Handler for PUT /products/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    if req.id != id {
        return Err(AppError::InvalidRequest("ID mismatch".to_string()));
    }
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    state
        .service
        .update_product(id, &req)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Handler for DELETE /products/:id
///
/// Soft delete; responds 204.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.service.delete_product(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.service.cache();
    Json(StatsResponse::new(cache.backend_name(), &cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.service.cache().backend_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::store::MemoryProductStore;
    use rust_decimal::Decimal;

    fn test_state() -> AppState {
        AppState::with_backends(
            Arc::new(MemoryProductStore::new()),
            Arc::new(MemoryCache::new()),
            &Config::default(),
        )
    }

    fn create_request(name: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            description: None,
            price: Decimal::new(1250, 2),
            stock: 2,
            category: None,
            sku: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();

        let result =
            create_product_handler(State(state.clone()), ValidJson(create_request("Widget"))).await;
        assert!(result.is_ok());

        let response = get_product_handler(State(state), Path(1)).await.unwrap();
        assert_eq!(response.name, "Widget");
    }

    #[tokio::test]
    async fn test_get_nonexistent_product() {
        let state = test_state();

        let result = get_product_handler(State(state), Path(99)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let state = test_state();

        let result = create_product_handler(State(state), ValidJson(create_request("X"))).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_update_id_mismatch() {
        let state = test_state();
        create_product_handler(State(state.clone()), ValidJson(create_request("Widget")))
            .await
            .unwrap();

        let req = UpdateProductRequest {
            id: 2,
            name: "Widget".to_string(),
            description: None,
            price: Decimal::ONE,
            stock: 0,
            category: None,
            sku: None,
            is_active: true,
        };
        let result = update_product_handler(State(state), Path(1), ValidJson(req)).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(ref msg)) if msg == "ID mismatch"));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();
        create_product_handler(State(state.clone()), ValidJson(create_request("Widget")))
            .await
            .unwrap();

        let status = delete_product_handler(State(state.clone()), Path(1))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = delete_product_handler(State(state), Path(1)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_rejects_zero_page_size() {
        let state = test_state();
        let params = ListProductsParams {
            page_size: Some(0),
            ..Default::default()
        };

        let result = list_products_handler(State(state), ValidQuery(params)).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.backend, "memory");
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler(State(test_state())).await;
        assert_eq!(response.status, "healthy");
    }
}
