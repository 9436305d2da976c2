//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use gamestore_core::{CategoryId, FranchiseId, ProductId};

/// A product as it appears in list views.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub franchise_id: FranchiseId,
    pub created_at: DateTime<Utc>,
}

/// A product with its franchise and category resolved.
///
/// The detail view carries more than the list view: the franchise and
/// category names and how many users favorited the product.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub franchise_id: FranchiseId,
    pub franchise_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub favorite_count: i64,
}

/// A search result row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SearchHit {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub franchise_name: String,
    pub category_name: String,
}
