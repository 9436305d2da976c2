//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use gamestore_core::{FranchiseId, ProductId};

use crate::db::products::ProductInput;
use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, FieldErrors, Result};
use crate::models::{Product, ProductDetail};
use crate::state::AppState;

/// Product create/replace request body.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<Decimal>,
    pub franchise_id: Option<FranchiseId>,
}

impl ProductRequest {
    fn validated(self) -> Result<ProductInput> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "name cannot be empty");
        }

        let price = match self.price {
            Some(price) if price < Decimal::ZERO => {
                errors.push("price", "price cannot be negative");
                price
            }
            Some(price) => price,
            None => {
                errors.push("price", "this field is required");
                Decimal::ZERO
            }
        };

        let Some(franchise_id) = self.franchise_id else {
            errors.push("franchise_id", "this field is required");
            return Err(AppError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(ProductInput {
            name: name.to_owned(),
            description: self.description,
            price,
            franchise_id,
        })
    }
}

/// Map a missing-franchise conflict to a field error.
fn map_create_error(e: RepositoryError) -> AppError {
    match e {
        RepositoryError::Conflict(message) => {
            AppError::Validation(FieldErrors::single("franchise_id", message))
        }
        other => other.into(),
    }
}

/// List all products.
///
/// GET /products
///
/// # Errors
///
/// Returns a 500 if the database query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Get one product with franchise, category, and favorite count resolved.
///
/// GET /products/{id}
///
/// # Errors
///
/// Returns a 404 if the product doesn't exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductDetail>> {
    let detail = ProductRepository::new(state.pool())
        .detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".to_owned()))?;

    Ok(Json(detail))
}

/// Create a product.
///
/// POST /products
///
/// # Errors
///
/// Returns a 400 with field-level errors if validation fails or the
/// franchise doesn't exist.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let input = req.validated()?;

    let product = ProductRepository::new(state.pool())
        .create(&input)
        .await
        .map_err(map_create_error)?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields.
///
/// PUT /products/{id}
///
/// # Errors
///
/// Returns a 400 with field-level errors if validation fails, a 404 if
/// the product doesn't exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<Product>> {
    let input = req.validated()?;

    let product = ProductRepository::new(state.pool())
        .update(id, &input)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("product not found".to_owned()),
            other => map_create_error(other),
        })?;

    Ok(Json(product))
}

/// Delete a product.
///
/// DELETE /products/{id}
///
/// # Errors
///
/// Returns a 404 if the product doesn't exist.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("product not found".to_owned()));
    }

    Ok(StatusCode::NO_CONTENT)
}
