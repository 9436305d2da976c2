//! Favorites route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use gamestore_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::Product;
use crate::state::AppState;

/// Favorites list response body.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Product>,
}

/// Status message response body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// List the authenticated user's favorited products.
///
/// GET /favorites
///
/// # Errors
///
/// Returns a 500 if the database query fails.
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<FavoritesResponse>> {
    let favorites = ProductRepository::new(state.pool())
        .list_favorites(user.id)
        .await?;

    Ok(Json(FavoritesResponse { favorites }))
}

/// Add a product to the authenticated user's favorites.
///
/// POST /favorites/{product_id}
///
/// Idempotent: favoriting an already-favorited product succeeds.
///
/// # Errors
///
/// Returns a 404 if the product doesn't exist.
pub async fn add(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
) -> Result<(StatusCode, Json<StatusResponse>)> {
    let products = ProductRepository::new(state.pool());

    products
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product does not exist".to_owned()))?;

    products.add_favorite(user.id, product_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            status: "product added to favorites",
        }),
    ))
}

/// Remove a product from the authenticated user's favorites.
///
/// DELETE /favorites/{product_id}
///
/// Idempotent: removing a product that wasn't favorited succeeds.
///
/// # Errors
///
/// Returns a 404 if the product doesn't exist.
pub async fn remove(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
) -> Result<Json<StatusResponse>> {
    let products = ProductRepository::new(state.pool());

    products
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product does not exist".to_owned()))?;

    products.remove_favorite(user.id, product_id).await?;

    Ok(Json(StatusResponse {
        status: "product removed from favorites",
    }))
}
