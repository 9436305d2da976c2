//! Cart route handlers.
//!
//! A cart line is an order item whose order reference is still null.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use gamestore_core::ProductId;

use crate::db::{CartRepository, ProductRepository, RepositoryError};
use crate::error::{AppError, FieldErrors, Result};
use crate::middleware::RequireUser;
use crate::models::OrderItem;
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Cart add request body.
#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: Option<ProductId>,
    pub qty: Option<i32>,
}

/// Cart patch request body.
#[derive(Debug, Deserialize)]
pub struct PatchCartItemRequest {
    pub qty: Option<i32>,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all of the authenticated user's order items.
///
/// GET /cart
///
/// # Errors
///
/// Returns a 500 if the database query fails.
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<OrderItem>>> {
    let items = CartRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(items))
}

/// Add a product to the cart, or return the existing cart line.
///
/// POST /cart
///
/// `qty` defaults to 1 and only applies when the line is created; re-adding
/// a product already in the cart leaves its quantity unchanged.
///
/// # Errors
///
/// Returns a 400 for a missing product id or non-positive quantity, a 404
/// if the product doesn't exist.
pub async fn add(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(req): Json<AddCartItemRequest>,
) -> Result<(StatusCode, Json<OrderItem>)> {
    let Some(product_id) = req.product_id else {
        return Err(AppError::Validation(FieldErrors::single(
            "product_id",
            "this field is required",
        )));
    };

    let qty = req.qty.unwrap_or(1);
    if qty < 1 {
        return Err(AppError::Validation(FieldErrors::single(
            "qty",
            "qty must be at least 1",
        )));
    }

    ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    let item = CartRepository::new(state.pool())
        .add_or_get(user.id, product_id, qty)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Remove the cart line for a product.
///
/// DELETE /cart/{product_id}
///
/// # Errors
///
/// Returns a 404 if the product or the cart line doesn't exist.
pub async fn remove(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    CartRepository::new(state.pool())
        .delete(user.id, product_id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("order item not found".to_owned()),
            other => other.into(),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Overwrite the quantity of the cart line for a product.
///
/// PATCH /cart/{product_id}
///
/// # Errors
///
/// Returns a 400 if `qty` is absent or non-positive, a 404 if the product
/// or the cart line doesn't exist.
pub async fn patch(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
    Json(req): Json<PatchCartItemRequest>,
) -> Result<Json<OrderItem>> {
    let Some(qty) = req.qty else {
        return Err(AppError::BadRequest("qty is required".to_owned()));
    };
    if qty < 1 {
        return Err(AppError::BadRequest("qty must be at least 1".to_owned()));
    }

    ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    let item = CartRepository::new(state.pool())
        .set_qty(user.id, product_id, qty)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("order item not found".to_owned()),
            other => other.into(),
        })?;

    Ok(Json(item))
}
