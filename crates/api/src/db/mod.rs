//! Database operations for the Gamestore `PostgreSQL` database.
//!
//! # Tables
//!
//! - `users` - Accounts and profile data
//! - `auth_tokens` - One opaque API token per user
//! - `categories` / `franchises` / `products` - The catalog
//! - `product_favorites` - User/product favorite memberships
//! - `orders` / `order_items` - Orders and cart lines (`order_id IS NULL`)
//! - `reviews` - One review per user per product
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p gamestore-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod tokens;
pub mod users;

pub use catalog::{CategoryRepository, FranchiseRepository};
pub use orders::{CartRepository, OrderRepository};
pub use products::ProductRepository;
pub use reviews::ReviewRepository;
pub use tokens::TokenRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
