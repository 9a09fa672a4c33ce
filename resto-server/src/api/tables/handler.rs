//! Dining Table API Handlers
//!
//! Tables are addressed by their business number, not their id.

use axum::{Json, extract::State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, TableStatus, TableStatusView, TableUpdate};

use crate::api::Ack;
use crate::api::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Parse the `:number` path segment
pub(crate) fn parse_table_number(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::new(ErrorCode::InvalidTableNumber).with_detail("number", raw))
}

async fn find(state: &AppState, number: i32) -> AppResult<DiningTable> {
    state
        .repo
        .find_table(number)
        .await?
        .ok_or_else(|| AppError::no_rows(format!("Table {number}")))
}

/// GET /tables - all tables by number
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = state.repo.list_tables().await?;
    Ok(Json(tables))
}

/// GET /tables/:number
pub async fn get_by_number(
    State(state): State<AppState>,
    ApiPath(number): ApiPath<String>,
) -> AppResult<Json<DiningTable>> {
    let number = parse_table_number(&number)?;
    Ok(Json(find(&state, number).await?))
}

/// PUT /tables/:number - set status and notes (an unknown number is acknowledged)
pub async fn update(
    State(state): State<AppState>,
    ApiPath(number): ApiPath<String>,
    ApiJson(payload): ApiJson<TableUpdate>,
) -> AppResult<Json<Ack>> {
    let status: TableStatus = payload
        .status
        .as_deref()
        .ok_or_else(|| AppError::new(ErrorCode::InvalidTableStatus))?
        .parse()?;
    let number = parse_table_number(&number)?;

    if state.repo.update_table(number, status, payload.notes).await? {
        tracing::info!(table_number = number, status = %status, "Table updated");
    } else {
        tracing::debug!(table_number = number, "Table to update does not exist");
    }
    Ok(Json(Ack::ok()))
}

/// GET /check-table/:number - status only
pub async fn check(
    State(state): State<AppState>,
    ApiPath(number): ApiPath<String>,
) -> AppResult<Json<TableStatusView>> {
    let number = parse_table_number(&number)?;
    let table = find(&state, number).await?;
    Ok(Json(TableStatusView {
        status: table.status,
    }))
}
