//! Franchise route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use gamestore_core::CategoryId;

use crate::db::FranchiseRepository;
use crate::error::Result;
use crate::models::Franchise;
use crate::state::AppState;

/// List all franchises in a category.
///
/// GET /franchises/{category_id}
///
/// An unknown category yields an empty list.
///
/// # Errors
///
/// Returns a 500 if the database query fails.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<Vec<Franchise>>> {
    let franchises = FranchiseRepository::new(state.pool())
        .list_by_category(category_id)
        .await?;

    Ok(Json(franchises))
}
