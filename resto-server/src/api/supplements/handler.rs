//! Supplement API Handlers

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Supplement, SupplementPayload};
use shared::util::fits_price_column;

use crate::api::Ack;
use crate::api::extract::{ApiJson, ApiPath};
use crate::state::AppState;

fn validate(mut payload: SupplementPayload) -> AppResult<SupplementPayload> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::required("name"));
    }
    if payload.price < Decimal::ZERO || !fits_price_column(payload.price) {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            "Supplement price must be between 0 and 99999999.99 with at most two decimals",
        )
        .with_detail("price", payload.price.to_string()));
    }
    payload.name = name.to_string();
    Ok(payload)
}

/// GET /supplements - by name
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Supplement>>> {
    let supplements = state.repo.list_supplements().await?;
    Ok(Json(supplements))
}

/// POST /supplements
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SupplementPayload>,
) -> AppResult<(StatusCode, Json<Supplement>)> {
    let created = state.repo.create_supplement(validate(payload)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /supplements/:id - replace name and price
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<SupplementPayload>,
) -> AppResult<Json<Supplement>> {
    let updated = state
        .repo
        .update_supplement(id, validate(payload)?)
        .await?
        .ok_or_else(|| AppError::no_rows(format!("Supplement {id}")))?;
    Ok(Json(updated))
}

/// DELETE /supplements/:id
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Ack>> {
    state.repo.delete_supplement(id).await?;
    Ok(Json(Ack::ok()))
}
