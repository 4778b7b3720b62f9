//! Domain entity and HTTP DTOs for the catalog service
//!
//! This module defines the stored `Product` entity and the
//! request/response bodies exchanged over HTTP.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::Product;
pub use requests::{CreateProductRequest, ListProductsParams, UpdateProductRequest};
pub use responses::{ErrorResponse, HealthResponse, PagedResult, ProductResponse, StatsResponse};
