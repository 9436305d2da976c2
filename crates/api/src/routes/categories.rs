//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use gamestore_core::CategoryId;

use crate::db::CategoryRepository;
use crate::error::{AppError, FieldErrors, Result};
use crate::models::Category;
use crate::state::AppState;

/// Category create/update request body.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
}

impl CategoryRequest {
    fn validated_name(&self) -> Result<&str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(FieldErrors::single(
                "name",
                "name cannot be empty",
            )));
        }
        Ok(name)
    }
}

/// List all categories.
///
/// GET /categories
///
/// # Errors
///
/// Returns a 500 if the database query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Get one category.
///
/// GET /categories/{id}
///
/// # Errors
///
/// Returns a 404 if the category doesn't exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>> {
    let category = CategoryRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("category not found".to_owned()))?;

    Ok(Json(category))
}

/// Create a category.
///
/// POST /categories
///
/// # Errors
///
/// Returns a 400 if the name is empty.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>)> {
    let name = req.validated_name()?;

    let category = CategoryRepository::new(state.pool()).create(name).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Rename a category.
///
/// PUT /categories/{id}
///
/// # Errors
///
/// Returns a 400 if the name is empty, a 404 if the category doesn't exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    let name = req.validated_name()?;

    let category = CategoryRepository::new(state.pool())
        .update(id, name)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound("category not found".to_owned())
            }
            other => other.into(),
        })?;

    Ok(Json(category))
}

/// Delete a category.
///
/// DELETE /categories/{id}
///
/// # Errors
///
/// Returns a 404 if the category doesn't exist.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    let deleted = CategoryRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("category not found".to_owned()));
    }

    Ok(StatusCode::NO_CONTENT)
}
