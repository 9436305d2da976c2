//! Catalog grouping types.

use serde::Serialize;
use sqlx::FromRow;

use gamestore_core::{CategoryId, FranchiseId};

/// A top-level product grouping (e.g., "RPG", "Strategy").
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A game franchise, belonging to exactly one category.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Franchise {
    pub id: FranchiseId,
    pub name: String,
    pub category_id: CategoryId,
}
