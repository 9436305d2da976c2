//! Integration tests for Gamestore.
//!
//! These tests drive the public HTTP API of a running server with a real
//! database behind it, so they are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p gamestore-cli -- migrate
//!
//! # Start the API server
//! cargo run -p gamestore-api
//!
//! # Run the integration tests
//! cargo test -p gamestore-integration-tests -- --ignored
//! ```
//!
//! The server address defaults to `http://localhost:8000` and can be
//! overridden with `GAMESTORE_BASE_URL`. Franchise fixtures are inserted
//! straight into the database (there is no public franchise-create
//! endpoint), so `GAMESTORE_DATABASE_URL` must point at the same database
//! the server uses.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use reqwest::Client;
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

/// A test client bound to a running Gamestore server.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Create a context for the server named by `GAMESTORE_BASE_URL`
    /// (default `http://localhost:8000`).
    #[must_use]
    pub fn new() -> Self {
        let base_url = std::env::var("GAMESTORE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Full URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Connect to the database behind the server, for fixtures the public
    /// API cannot create.
    pub async fn db(&self) -> PgPool {
        let database_url = std::env::var("GAMESTORE_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .expect("GAMESTORE_DATABASE_URL not set");

        PgPool::connect(&database_url)
            .await
            .expect("failed to connect to test database")
    }

    /// Sign up a fresh user with a unique username/email and return
    /// `(username, password, token)` after logging in.
    pub async fn signup_and_login(&self) -> (String, String, String) {
        let suffix = Uuid::new_v4().simple().to_string();
        let username = format!("user_{suffix}");
        let email = format!("user_{suffix}@example.com");
        let password = "correct-horse-battery".to_string();

        let resp = self
            .client
            .post(self.url("/signup"))
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("signup request failed");
        assert_eq!(resp.status(), 201, "signup should succeed");

        let token = self.login(&username, &password).await;

        (username, password, token)
    }

    /// Log in and return the token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let resp = self
            .client
            .post(self.url("/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("login request failed");
        assert_eq!(resp.status(), 200, "login should succeed");

        let body: Value = resp.json().await.expect("login response not JSON");
        body["token"].as_str().expect("token missing").to_string()
    }

    /// Create a category via the API, returning its id.
    pub async fn create_category(&self, name: &str) -> i64 {
        let resp = self
            .client
            .post(self.url("/categories"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("create category request failed");
        assert_eq!(resp.status(), 201);

        let body: Value = resp.json().await.expect("category response not JSON");
        body["id"].as_i64().expect("category id missing")
    }

    /// Insert a franchise fixture directly into the database, returning its id.
    pub async fn create_franchise(&self, name: &str, category_id: i64) -> i64 {
        let pool = self.db().await;

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO franchises (name, category_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(i32::try_from(category_id).unwrap())
        .fetch_one(&pool)
        .await
        .expect("failed to insert franchise fixture");

        i64::from(id)
    }

    /// Create a product via the API, returning its id.
    pub async fn create_product(&self, name: &str, franchise_id: i64) -> i64 {
        let resp = self
            .client
            .post(self.url("/products"))
            .json(&json!({
                "name": name,
                "description": "integration test product",
                "price": "9.99",
                "franchise_id": franchise_id,
            }))
            .send()
            .await
            .expect("create product request failed");
        assert_eq!(resp.status(), 201);

        let body: Value = resp.json().await.expect("product response not JSON");
        body["id"].as_i64().expect("product id missing")
    }

    /// Create a category, franchise, and product in one go, returning
    /// `(category_id, franchise_id, product_id)`.
    pub async fn create_catalog_fixture(&self, tag: &str) -> (i64, i64, i64) {
        let category_id = self.create_category(&format!("category-{tag}")).await;
        let franchise_id = self
            .create_franchise(&format!("franchise-{tag}"), category_id)
            .await;
        let product_id = self
            .create_product(&format!("product-{tag}"), franchise_id)
            .await;

        (category_id, franchise_id, product_id)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
