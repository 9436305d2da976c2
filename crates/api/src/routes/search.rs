//! Search route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::SearchHit;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Search products by product, franchise, or category name.
///
/// GET /search?q=
///
/// An absent or empty `q` returns all products.
///
/// # Errors
///
/// Returns a 500 if the database query fails.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchHit>>> {
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());

    let hits = ProductRepository::new(state.pool()).search(q).await?;

    Ok(Json(hits))
}
