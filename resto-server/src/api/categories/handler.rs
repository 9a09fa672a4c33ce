//! Category API Handlers
//!
//! Names are trimmed and unique (case-sensitive). The pre-check gives a
//! friendly 409; the unique index catches concurrent inserts.

use axum::{Json, extract::State, http::StatusCode};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryPayload};
use shared::util::non_blank;

use crate::api::Ack;
use crate::api::extract::{ApiJson, ApiPath};
use crate::db::RepoError;
use crate::state::AppState;

fn name_taken(name: &str) -> AppError {
    AppError::new(ErrorCode::CategoryNameExists).with_detail("name", name)
}

/// Trimmed, non-empty, not used by another category
async fn checked_name(
    state: &AppState,
    payload: &CategoryPayload,
    exclude_id: Option<i64>,
) -> AppResult<String> {
    let name = non_blank(payload.name.as_deref())
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNameRequired))?;
    if state.repo.category_name_taken(name, exclude_id).await? {
        return Err(name_taken(name));
    }
    Ok(name.to_string())
}

/// GET /categories - alphabetical
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.repo.list_categories().await?;
    Ok(Json(categories))
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CategoryPayload>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let name = checked_name(&state, &payload, None).await?;
    let category = match state.repo.create_category(&name).await {
        Ok(category) => category,
        Err(RepoError::Duplicate(_)) => return Err(name_taken(&name)),
        Err(e) => return Err(e.into()),
    };
    tracing::info!(id = category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/:id - rename (an unknown id is acknowledged)
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CategoryPayload>,
) -> AppResult<Json<Ack>> {
    let name = checked_name(&state, &payload, Some(id)).await?;
    match state.repo.update_category(id, &name).await {
        Ok(true) => Ok(Json(Ack::ok())),
        Ok(false) => {
            tracing::debug!(id, "Category to rename does not exist");
            Ok(Json(Ack::ok()))
        }
        Err(RepoError::Duplicate(_)) => Err(name_taken(&name)),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /categories/:id - menu items keep their category name
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Ack>> {
    state.repo.delete_category(id).await?;
    Ok(Json(Ack::ok()))
}
