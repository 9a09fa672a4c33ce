//! Order API Handlers

use axum::{Json, extract::State};
use shared::error::{AppError, AppResult};
use shared::models::{Order, StatusUpdateRequest, StatusUpdateResponse};

use crate::api::extract::{ApiJson, ApiPath};
use crate::services::ordering;
use crate::state::AppState;

/// GET /orders/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Order>> {
    let order = state
        .repo
        .find_order(id)
        .await?
        .ok_or_else(|| AppError::no_rows(format!("Order {id}")))?;
    Ok(Json(order))
}

/// PUT /orders/:id/status - `done` also frees the table
pub async fn update_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<StatusUpdateRequest>,
) -> AppResult<Json<StatusUpdateResponse>> {
    let resp =
        ordering::set_order_status(state.repo.as_ref(), id, payload.status.as_deref()).await?;
    Ok(Json(resp))
}
