//! Product entity as held by the store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// `id` is assigned by the store on insert. Soft-deleted products keep their
/// row but are never returned by any read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether the product belongs in collection reads (active and not deleted).
    pub fn is_listed(&self) -> bool {
        self.is_active && !self.is_deleted
    }
}
