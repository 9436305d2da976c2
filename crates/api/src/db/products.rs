//! Product repository, including favorites and search.

use rust_decimal::Decimal;
use sqlx::PgPool;

use gamestore_core::{FranchiseId, ProductId, UserId};

use super::RepositoryError;
use crate::models::{Product, ProductDetail, SearchHit};

/// Fields required to create or replace a product.
#[derive(Debug)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub franchise_id: FranchiseId,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, franchise_id, created_at
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, franchise_id, created_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Get a product with its franchise, category, and favorite count resolved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn detail(&self, id: ProductId) -> Result<Option<ProductDetail>, RepositoryError> {
        let detail = sqlx::query_as::<_, ProductDetail>(
            r"
            SELECT p.id, p.name, p.description, p.price,
                   f.id AS franchise_id, f.name AS franchise_name,
                   c.id AS category_id, c.name AS category_name,
                   (SELECT COUNT(*) FROM product_favorites pf WHERE pf.product_id = p.id)
                       AS favorite_count
            FROM products p
            JOIN franchises f ON f.id = p.franchise_id
            JOIN categories c ON c.id = f.category_id
            WHERE p.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(detail)
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the franchise doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, description, price, franchise_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, franchise_id, created_at
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.franchise_id)
        .fetch_one(self.pool)
        .await
        .map_err(map_franchise_fk_violation)?;

        Ok(product)
    }

    /// Replace a product's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Conflict` if the franchise doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            UPDATE products
            SET name = $2, description = $3, price = $4, franchise_id = $5
            WHERE id = $1
            RETURNING id, name, description, price, franchise_id, created_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.franchise_id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_franchise_fk_violation)?;

        product.ok_or(RepositoryError::NotFound)
    }

    /// Delete a product.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Search products by substring against the product name, its franchise
    /// name, or its franchise's category name (case-insensitive).
    ///
    /// A `None` query returns all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<SearchHit>, RepositoryError> {
        let hits = sqlx::query_as::<_, SearchHit>(
            r"
            SELECT p.id, p.name, p.price,
                   f.name AS franchise_name, c.name AS category_name
            FROM products p
            JOIN franchises f ON f.id = p.franchise_id
            JOIN categories c ON c.id = f.category_id
            WHERE $1::text IS NULL
               OR p.name ILIKE '%' || $1 || '%'
               OR f.name ILIKE '%' || $1 || '%'
               OR c.name ILIKE '%' || $1 || '%'
            ORDER BY p.id
            ",
        )
        .bind(query)
        .fetch_all(self.pool)
        .await?;

        Ok(hits)
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// List all products the user has favorited.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT p.id, p.name, p.description, p.price, p.franchise_id, p.created_at
            FROM products p
            JOIN product_favorites pf ON pf.product_id = p.id
            WHERE pf.user_id = $1
            ORDER BY p.id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Add a product to the user's favorites. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn add_favorite(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO product_favorites (user_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, product_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Remove a product from the user's favorites. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM product_favorites
            WHERE user_id = $1 AND product_id = $2
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

/// Map a foreign-key violation on `franchise_id` to a `Conflict`.
fn map_franchise_fk_violation(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_foreign_key_violation()
    {
        return RepositoryError::Conflict("franchise does not exist".to_owned());
    }
    RepositoryError::Database(e)
}
