//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /products?page&pageSize&category&searchTerm` - List products
//! - `GET /products/:id` - Fetch one product
//! - `POST /products` - Create a product
//! - `PUT /products/:id` - Update a product
//! - `DELETE /products/:id` - Soft-delete a product
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
