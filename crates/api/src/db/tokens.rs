//! Auth token repository.
//!
//! Each user has at most one opaque API token. Login either inserts a
//! freshly generated key or returns the existing one; the choice happens
//! inside a single upsert so concurrent logins cannot mint two tokens.

use sqlx::PgPool;

use gamestore_core::UserId;

use super::RepositoryError;
use crate::models::User;

/// Repository for auth token operations.
pub struct TokenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new token repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Return the user's token key, inserting `fresh_key` if they have none.
    ///
    /// The `DO UPDATE SET key = auth_tokens.key` arm is a no-op update whose
    /// only purpose is to make `RETURNING` yield the existing row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_or_create(
        &self,
        user_id: UserId,
        fresh_key: &str,
    ) -> Result<String, RepositoryError> {
        let key = sqlx::query_scalar::<_, String>(
            r"
            INSERT INTO auth_tokens (user_id, key)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET key = auth_tokens.key
            RETURNING key
            ",
        )
        .bind(user_id)
        .bind(fresh_key)
        .fetch_one(self.pool)
        .await?;

        Ok(key)
    }

    /// Resolve a token key to its user.
    ///
    /// Returns `None` if the key is unknown.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_user_by_key(&self, key: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT u.id, u.username, u.email, u.first_name, u.last_name,
                   u.address, u.city, u.country, u.postal_code, u.created_at, u.updated_at
            FROM auth_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.key = $1
            ",
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }
}
