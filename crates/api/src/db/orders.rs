//! Order and cart-line repositories.
//!
//! A cart line is an `order_items` row whose `order_id` is null. A partial
//! unique index on (`user_id`, `product_id`) over those rows lets the insert
//! path be a single upsert instead of a racy read-then-write.

use sqlx::PgPool;

use gamestore_core::{OrderId, ProductId, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

/// Repository for placed orders.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all orders belonging to a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Fetch the items of the given orders in one query.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items_for_orders(
        &self,
        order_ids: &[OrderId],
    ) -> Result<Vec<OrderItem>, RepositoryError> {
        let ids: Vec<i32> = order_ids.iter().map(|id| id.as_i32()).collect();

        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT id, user_id, product_id, order_id, qty, created_at
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY id
            ",
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}

/// Repository for cart lines.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all of the user's order items, carted and ordered alike.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT id, user_id, product_id, order_id, qty, created_at
            FROM order_items
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Create the user's cart line for a product, or return the existing one.
    ///
    /// When the line already exists its quantity is left untouched; `qty`
    /// only applies on creation. The `DO UPDATE SET qty = order_items.qty`
    /// arm is a no-op update so `RETURNING` always yields the row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn add_or_get(
        &self,
        user_id: UserId,
        product_id: ProductId,
        qty: i32,
    ) -> Result<OrderItem, RepositoryError> {
        let item = sqlx::query_as::<_, OrderItem>(
            r"
            INSERT INTO order_items (user_id, product_id, qty)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, product_id) WHERE order_id IS NULL
            DO UPDATE SET qty = order_items.qty
            RETURNING id, user_id, product_id, order_id, qty, created_at
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(qty)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// Delete the user's cart line for a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such line exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM order_items
            WHERE user_id = $1 AND product_id = $2 AND order_id IS NULL
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Overwrite the quantity of the user's cart line for a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such line exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_qty(
        &self,
        user_id: UserId,
        product_id: ProductId,
        qty: i32,
    ) -> Result<OrderItem, RepositoryError> {
        let item = sqlx::query_as::<_, OrderItem>(
            r"
            UPDATE order_items
            SET qty = $3
            WHERE user_id = $1 AND product_id = $2 AND order_id IS NULL
            RETURNING id, user_id, product_id, order_id, qty, created_at
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(qty)
        .fetch_optional(self.pool)
        .await?;

        item.ok_or(RepositoryError::NotFound)
    }
}
