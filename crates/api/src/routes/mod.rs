//! HTTP route handlers for the Gamestore API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Auth
//! POST /signup                 - Create an account
//! POST /login                  - Exchange credentials for the API token
//!
//! # Current user (token required)
//! GET  /users/data             - Full profile
//! PUT  /users/data             - Partial profile update
//! GET  /users/orders           - Order history with items
//!
//! # Catalog
//! GET  /categories             - Category listing
//! POST /categories             - Create category
//! GET  /categories/{id}        - Category detail
//! PUT  /categories/{id}        - Rename category
//! DELETE /categories/{id}      - Delete category
//! GET  /franchises/{category_id} - Franchises in a category
//! GET  /products               - Product listing
//! POST /products               - Create product
//! GET  /products/{id}          - Product detail (richer than the listing)
//! PUT  /products/{id}          - Replace product
//! DELETE /products/{id}        - Delete product
//! GET  /search?q=              - Search by product/franchise/category name
//!
//! # Reviews
//! GET  /products/{id}/reviews  - Reviews for a product
//! POST /products/{id}/reviews  - Create review (token required)
//!
//! # Favorites (token required)
//! GET  /favorites              - Favorited products
//! POST /favorites/{product_id} - Add to favorites (idempotent)
//! DELETE /favorites/{product_id} - Remove from favorites (idempotent)
//!
//! # Cart (token required)
//! GET  /cart                   - All of the user's order items
//! POST /cart                   - Add a cart line (get-or-create)
//! DELETE /cart/{product_id}    - Remove a cart line
//! PATCH /cart/{product_id}     - Overwrite a cart line's quantity
//! ```

pub mod auth;
pub mod cart;
pub mod categories;
pub mod favorites;
pub mod franchises;
pub mod products;
pub mod reviews;
pub mod search;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the current-user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/data", get(users::profile).put(users::update_profile))
        .route("/orders", get(users::orders))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route(
            "/{id}",
            get(categories::show)
                .put(categories::update)
                .delete(categories::destroy),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
        .route(
            "/{id}/reviews",
            get(reviews::index).post(reviews::create),
        )
}

/// Create the favorites routes router.
pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::index))
        .route(
            "/{product_id}",
            post(favorites::add).delete(favorites::remove),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::index).post(cart::add))
        .route("/{product_id}", delete(cart::remove).patch(cart::patch))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth routes
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        // Current-user routes
        .nest("/users", user_routes())
        // Catalog routes
        .nest("/categories", category_routes())
        .route("/franchises/{category_id}", get(franchises::by_category))
        .nest("/products", product_routes())
        .route("/search", get(search::search))
        // Favorites routes
        .nest("/favorites", favorite_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
