//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::query::ProductQuery;

// == Field Limits ==
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
pub const CATEGORY_MAX_CHARS: usize = 100;
pub const SKU_MAX_CHARS: usize = 50;

/// Page number used when the query string omits `page`.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the query string omits `pageSize`.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Request body for POST /products
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
}

impl CreateProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_product_fields(
            &self.name,
            self.description.as_deref(),
            self.price,
            self.stock,
            self.category.as_deref(),
            self.sku.as_deref(),
        )
    }
}

/// Request body for PUT /products/{id}
///
/// Every mutable field is replaced; `isActive` defaults to true when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UpdateProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_product_fields(
            &self.name,
            self.description.as_deref(),
            self.price,
            self.stock,
            self.category.as_deref(),
            self.sku.as_deref(),
        )
    }
}

fn validate_product_fields(
    name: &str,
    description: Option<&str>,
    price: Decimal,
    stock: i32,
    category: Option<&str>,
    sku: Option<&str>,
) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Name is required".to_string());
    }
    let name_len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
        return Some(format!(
            "Name must be between {} and {} characters",
            NAME_MIN_CHARS, NAME_MAX_CHARS
        ));
    }
    if exceeds(description, DESCRIPTION_MAX_CHARS) {
        return Some(format!(
            "Description exceeds maximum length of {} characters",
            DESCRIPTION_MAX_CHARS
        ));
    }
    if price < Decimal::new(1, 2) {
        return Some("Price must be at least 0.01".to_string());
    }
    if stock < 0 {
        return Some("Stock cannot be negative".to_string());
    }
    if exceeds(category, CATEGORY_MAX_CHARS) {
        return Some(format!(
            "Category exceeds maximum length of {} characters",
            CATEGORY_MAX_CHARS
        ));
    }
    if exceeds(sku, SKU_MAX_CHARS) {
        return Some(format!(
            "SKU exceeds maximum length of {} characters",
            SKU_MAX_CHARS
        ));
    }
    None
}

fn exceeds(value: Option<&str>, max_chars: usize) -> bool {
    value.is_some_and(|v| v.chars().count() > max_chars)
}

/// Query string for GET /products
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub category: Option<String>,
    pub search_term: Option<String>,
}

impl ListProductsParams {
    /// Validates paging bounds.
    pub fn validate(&self) -> Option<String> {
        if self.page == Some(0) {
            return Some("Page must be at least 1".to_string());
        }
        if self.page_size == Some(0) {
            return Some("Page size must be at least 1".to_string());
        }
        None
    }

    /// Converts into a normalized query, filling in defaults.
    pub fn into_query(self) -> ProductQuery {
        ProductQuery::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            self.category,
            self.search_term,
        )
    }
}
