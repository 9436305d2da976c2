//! Review domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use gamestore_core::{ProductId, ReviewId, UserId};

/// A user's review of a product. At most one per (user, product) pair.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Star rating, 1 to 5.
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
