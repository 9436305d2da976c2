//! Order domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use gamestore_core::{OrderId, OrderItemId, ProductId, UserId};

/// A placed order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// A quantity of one product for one user.
///
/// While `order_id` is null the row is a cart line: a pending purchase
/// quantity that has not been attached to an order yet.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub order_id: Option<OrderId>,
    pub qty: i32,
    pub created_at: DateTime<Utc>,
}
