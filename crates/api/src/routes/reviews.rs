//! Review route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use gamestore_core::ProductId;

use crate::db::{ProductRepository, ReviewRepository};
use crate::error::{AppError, FieldErrors, Result};
use crate::middleware::RequireUser;
use crate::models::Review;
use crate::state::AppState;

/// Review create request body.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: Option<i32>,
    #[serde(default)]
    pub comment: String,
}

/// List all reviews for a product.
///
/// GET /products/{id}/reviews
///
/// # Errors
///
/// Returns a 404 if the product doesn't exist.
pub async fn index(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Vec<Review>>> {
    ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    let reviews = ReviewRepository::new(state.pool())
        .list_for_product(product_id)
        .await?;

    Ok(Json(reviews))
}

/// Review a product.
///
/// POST /products/{id}/reviews
///
/// A user can review each product at most once; a second attempt fails
/// with a 409 regardless of the review's content.
///
/// # Errors
///
/// Returns a 400 with field-level errors for an invalid payload, a 404
/// if the product doesn't exist, a 409 for a duplicate review.
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>)> {
    let rating = match req.rating {
        Some(rating) if (1..=5).contains(&rating) => rating,
        Some(_) => {
            return Err(AppError::Validation(FieldErrors::single(
                "rating",
                "rating must be between 1 and 5",
            )));
        }
        None => {
            return Err(AppError::Validation(FieldErrors::single(
                "rating",
                "this field is required",
            )));
        }
    };

    ProductRepository::new(state.pool())
        .get(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    let review = ReviewRepository::new(state.pool())
        .create(user.id, product_id, rating, &req.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}
