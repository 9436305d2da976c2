//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use gamestore_core::{Email, UserId, Username};

/// A Gamestore account with its profile data.
///
/// The password hash is never part of this type; it is fetched separately
/// by the auth service when verifying credentials.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique across the store.
    pub username: Username,
    /// Email address, unique across the store.
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    /// Shipping address fields. Empty string / 0 until the user fills them in.
    pub address: String,
    pub city: String,
    pub country: String,
    pub postal_code: i32,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}
