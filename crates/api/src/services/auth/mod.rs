//! Authentication service.
//!
//! Handles signup validation, password hashing, and login with opaque
//! API tokens (one long-lived token per user, reused across logins).

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::RngCore;
use sqlx::PgPool;

use gamestore_core::{Email, Username};

use crate::db::users::NewUser;
use crate::db::{RepositoryError, TokenRepository, UserRepository};
use crate::error::FieldErrors;
use crate::models::User;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Number of random bytes in a token key (hex-encoded to 40 characters).
const TOKEN_KEY_BYTES: usize = 20;

/// Raw signup fields as received from the client.
#[derive(Debug)]
pub struct SignupData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub postal_code: i32,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: TokenRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
            tokens: TokenRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// All fields are validated before anything is written; validation
    /// failures are accumulated per field so the client sees them at once.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` with field-level messages if any
    /// field is invalid or the username/email is already taken.
    pub async fn register(&self, data: &SignupData) -> Result<User, AuthError> {
        let mut errors = FieldErrors::default();

        let username = match Username::parse(&data.username) {
            Ok(username) => Some(username),
            Err(e) => {
                errors.push("username", e.to_string());
                None
            }
        };

        let email = match Email::parse(&data.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push("email", e.to_string());
                None
            }
        };

        if let Err(message) = validate_password(&data.password) {
            errors.push("password", message);
        }

        let (Some(username), Some(email)) = (username, email) else {
            return Err(AuthError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let password_hash = hash_password(&data.password)?;

        let new_user = NewUser {
            username,
            email,
            password_hash,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            address: data.address.clone(),
            city: data.city.clone(),
            country: data.country.clone(),
            postal_code: data.postal_code,
        };

        self.users.create(&new_user).await.map_err(|e| match e {
            RepositoryError::Conflict(message) => {
                let field = if message.contains("username") {
                    "username"
                } else {
                    "email"
                };
                AuthError::Validation(FieldErrors::single(field, message))
            }
            other => AuthError::Repository(other),
        })
    }

    /// Login with username and password, returning the user's token key.
    ///
    /// The same key is returned on every login; a fresh key is only minted
    /// for users who never logged in before.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        // An unparseable username can't belong to an account
        let username = Username::parse(username).map_err(|_| AuthError::InvalidCredentials)?;

        let (user, password_hash) = self
            .users
            .get_password_hash(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        let fresh_key = generate_token_key();
        let key = self.tokens.get_or_create(user.id, &fresh_key).await?;

        Ok(key)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Generate a fresh opaque token key (40 hex characters).
fn generate_token_key() -> String {
    let mut bytes = [0u8; TOKEN_KEY_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_too_short() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("1234567").is_err());
    }

    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("correct horse battery staple").is_ok());
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("hunter22hunter22").unwrap();
        assert!(verify_password("hunter22hunter22", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong-password", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_password_garbage_hash() {
        assert!(matches!(
            verify_password("whatever", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_generate_token_key_shape() {
        let key = generate_token_key();
        assert_eq!(key.len(), 40);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));

        // Two keys should never collide
        assert_ne!(key, generate_token_key());
    }
}
