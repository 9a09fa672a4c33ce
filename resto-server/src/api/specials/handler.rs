//! Specials API Handlers
//!
//! The daily special is a flag carried by at most one menu item; promotions
//! are a flag plus a price pair on any number of items.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DailySpecialRequest, PromotionRequest, SpecialsOverview};
use shared::util::fits_price_column;

use crate::api::Ack;
use crate::api::extract::{ApiJson, ApiPath};
use crate::state::AppState;

fn checked_price(field: &str, price: Decimal) -> AppResult<Decimal> {
    if price < Decimal::ZERO || !fits_price_column(price) {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!("{field} must be between 0 and 99999999.99 with at most two decimals"),
        )
        .with_detail("field", field));
    }
    Ok(price)
}

/// GET /specials
pub async fn overview(State(state): State<AppState>) -> AppResult<Json<SpecialsOverview>> {
    let daily_special = state.repo.find_daily_special().await?;
    let promotional_items = state.repo.list_promotional_items().await?;
    Ok(Json(SpecialsOverview {
        daily_special,
        promotional_items,
    }))
}

/// PUT /specials/daily - move the daily special to another item
pub async fn set_daily(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DailySpecialRequest>,
) -> AppResult<Json<Ack>> {
    let id = payload
        .food_item_id
        .ok_or_else(|| AppError::required("food_item_id"))?;
    let discount = payload
        .discounted_price
        .map(|p| checked_price("discounted_price", p))
        .transpose()?;

    if !state.repo.set_daily_special(id, discount).await? {
        return Err(AppError::no_rows(format!("Menu item {id}")));
    }
    tracing::info!(id, "Daily special set");
    Ok(Json(Ack::with_message("Plat du jour mis à jour.")))
}

/// DELETE /specials/daily
pub async fn clear_daily(State(state): State<AppState>) -> AppResult<Json<Ack>> {
    state.repo.clear_daily_special().await?;
    Ok(Json(Ack::with_message("Plat du jour supprimé.")))
}

/// PUT /specials/promotional - add or update a promotion (an unknown item
/// is acknowledged)
pub async fn set_promotion(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PromotionRequest>,
) -> AppResult<Json<Ack>> {
    let (Some(id), Some(original), Some(discounted)) = (
        payload.food_item_id,
        payload.original_price,
        payload.discounted_price,
    ) else {
        return Err(AppError::validation(
            "food_item_id, original_price and discounted_price are required",
        ));
    };
    let original = checked_price("original_price", original)?;
    let discounted = checked_price("discounted_price", discounted)?;

    if state.repo.set_promotion(id, original, discounted).await? {
        tracing::info!(id, "Promotion set");
    } else {
        tracing::debug!(id, "Menu item to promote does not exist");
    }
    Ok(Json(Ack::with_message("Promotion ajoutée/mise à jour.")))
}

/// DELETE /specials/promotional/:id
pub async fn clear_promotion(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Ack>> {
    state.repo.clear_promotion(id).await?;
    Ok(Json(Ack::with_message("Promotion supprimée.")))
}
