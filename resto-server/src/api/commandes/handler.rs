//! Commande API Handlers

use axum::{Json, extract::State};
use shared::error::AppResult;
use shared::models::{
    CommandeSummary, CommandeWithItems, PlaceOrderRequest, PlaceOrderResponse,
    StatusUpdateRequest, StatusUpdateResponse,
};

use crate::api::extract::{ApiJson, ApiPath};
use crate::services::ordering;
use crate::state::AppState;

/// POST /commandes - place an order
pub async fn place(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PlaceOrderRequest>,
) -> AppResult<Json<PlaceOrderResponse>> {
    let placed = ordering::place_order(state.repo.as_ref(), payload).await?;
    Ok(Json(placed))
}

/// GET /commandes - newest first, short item lines
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CommandeSummary>>> {
    let commandes = state.repo.list_commandes().await?;
    Ok(Json(commandes.into_iter().map(CommandeSummary::from).collect()))
}

/// GET /commandes_with_items - newest first, full item lines
pub async fn list_with_items(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CommandeWithItems>>> {
    let commandes = state.repo.list_commandes().await?;
    Ok(Json(commandes))
}

/// PUT /commandes/:id/status - `done` also frees the table
pub async fn update_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<StatusUpdateRequest>,
) -> AppResult<Json<StatusUpdateResponse>> {
    let resp = ordering::set_commande_status(state.repo.as_ref(), id, payload.status.as_deref())
        .await?;
    Ok(Json(resp))
}
