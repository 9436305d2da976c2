//! Current-user route handlers.

use std::collections::HashMap;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gamestore_core::{Email, OrderId};

use crate::db::users::ProfileUpdate;
use crate::db::{OrderRepository, RepositoryError, UserRepository};
use crate::error::{AppError, FieldErrors, Result};
use crate::middleware::RequireUser;
use crate::models::{OrderItem, User};
use crate::state::AppState;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Partial profile update. Absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<i32>,
}

/// An order with its items nested.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Return the authenticated user's full profile.
///
/// GET /users/data
pub async fn profile(RequireUser(user): RequireUser) -> Json<User> {
    Json(user)
}

/// Partially update the authenticated user's profile.
///
/// PUT /users/data
///
/// # Errors
///
/// Returns a 400 with field-level errors for an invalid or taken email.
pub async fn update_profile(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<User>> {
    let email = match req.email.as_deref() {
        Some(raw) => Some(Email::parse(raw).map_err(|e| {
            AppError::Validation(FieldErrors::single("email", e.to_string()))
        })?),
        None => None,
    };

    let update = ProfileUpdate {
        email,
        first_name: req.first_name,
        last_name: req.last_name,
        address: req.address,
        city: req.city,
        country: req.country,
        postal_code: req.postal_code,
    };

    let updated = UserRepository::new(state.pool())
        .update_profile(user.id, &update)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(message) => {
                AppError::Validation(FieldErrors::single("email", message))
            }
            other => other.into(),
        })?;

    Ok(Json(updated))
}

/// List the authenticated user's orders with their items.
///
/// GET /users/orders
///
/// # Errors
///
/// Returns a 500 if the database query fails.
pub async fn orders(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<OrderResponse>>> {
    let repo = OrderRepository::new(state.pool());

    let orders = repo.list_for_user(user.id).await?;
    let order_ids: Vec<OrderId> = orders.iter().map(|order| order.id).collect();

    let mut items_by_order: HashMap<OrderId, Vec<OrderItem>> = HashMap::new();
    for item in repo.items_for_orders(&order_ids).await? {
        if let Some(order_id) = item.order_id {
            items_by_order.entry(order_id).or_default().push(item);
        }
    }

    let response = orders
        .into_iter()
        .map(|order| OrderResponse {
            items: items_by_order.remove(&order.id).unwrap_or_default(),
            id: order.id,
            created_at: order.created_at,
        })
        .collect();

    Ok(Json(response))
}
