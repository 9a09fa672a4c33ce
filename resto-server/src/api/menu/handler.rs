//! Menu API Handlers

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, NewMenuItem, PLACEHOLDER_IMAGE};
use shared::util::{fits_price_column, non_blank};

use crate::api::Ack;
use crate::api::extract::{ApiJson, ApiPath};
use crate::state::AppState;

fn check_price(price: Decimal) -> AppResult<Decimal> {
    if price <= Decimal::ZERO || !fits_price_column(price) {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            "Price must be greater than 0 and below 100000000, with at most two decimals",
        )
        .with_detail("price", price.to_string()));
    }
    Ok(price)
}

fn validate_create(payload: MenuItemCreate) -> AppResult<NewMenuItem> {
    let name = non_blank(payload.name.as_deref()).ok_or_else(|| AppError::required("name"))?;
    let category =
        non_blank(payload.category.as_deref()).ok_or_else(|| AppError::required("category"))?;
    let price = check_price(payload.price.ok_or_else(|| AppError::required("price"))?)?;

    Ok(NewMenuItem {
        name: name.to_string(),
        category: category.to_string(),
        price,
        description: payload.description.unwrap_or_default(),
        image_path: payload
            .image_path
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        supplements: payload.supplements,
    })
}

fn validate_update(mut payload: MenuItemUpdate) -> AppResult<MenuItemUpdate> {
    if let Some(name) = payload.name.take() {
        let name = non_blank(Some(name.as_str())).ok_or_else(|| AppError::required("name"))?;
        payload.name = Some(name.to_string());
    }
    if let Some(category) = payload.category.take() {
        let category =
            non_blank(Some(category.as_str())).ok_or_else(|| AppError::required("category"))?;
        payload.category = Some(category.to_string());
    }
    if let Some(price) = payload.price {
        check_price(price)?;
    }
    Ok(payload)
}

/// GET /menu - all items, grouped by category
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.repo.list_menu_items().await?;
    Ok(Json(items))
}

/// POST /menu - create an item
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let item = validate_create(payload)?;
    let created = state.repo.create_menu_item(item).await?;
    tracing::info!(id = created.id, name = %created.name, "Menu item created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /menu/:id - partial update (an unknown id is acknowledged)
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<MenuItemUpdate>,
) -> AppResult<Json<Ack>> {
    let payload = validate_update(payload)?;
    if !state.repo.update_menu_item(id, payload).await? {
        tracing::debug!(id, "Menu item to update does not exist");
    }
    Ok(Json(Ack::ok()))
}

/// DELETE /menu/:id
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Ack>> {
    if !state.repo.delete_menu_item(id).await? {
        tracing::debug!(id, "Menu item already absent");
    }
    Ok(Json(Ack::ok()))
}
