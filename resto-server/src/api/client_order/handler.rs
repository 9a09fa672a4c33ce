//! Client Order Lookup Handler

use axum::{Json, extract::State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ClientOrderQuery, CommandeSummary};

use crate::api::extract::ApiQuery;
use crate::api::tables::parse_table_number;
use crate::state::AppState;

/// GET /client-order?client_name=&table_number= - most recent commande
pub async fn latest(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClientOrderQuery>,
) -> AppResult<Json<CommandeSummary>> {
    let client_name = query
        .client_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::required("client_name"))?;
    let table_number = query
        .table_number
        .as_deref()
        .ok_or_else(|| AppError::required("table_number"))
        .and_then(parse_table_number)?;

    let commande = state
        .repo
        .find_latest_commande(client_name, table_number)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::CommandeNotFound)
                .with_detail("client_name", client_name)
                .with_detail("table_number", table_number)
        })?;

    Ok(Json(commande.into()))
}
