//! Order placement and status transitions
//!
//! Placement inserts the order, its commande and the commande lines in one
//! repository transaction, then marks the table occupied. The table update is
//! a best-effort side effect: its failure is logged and never undoes the order.
//! Setting a status to `done` releases the table the same way.

use chrono::Utc;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    DEFAULT_CLIENT_NAME, NewCommandeItem, OrderPlacement, OrderStatus, PlaceOrderRequest,
    PlaceOrderResponse, StatusUpdateResponse,
};
use shared::util::{fits_price_column, non_blank};

use crate::db::Repository;

const PLACED_MESSAGE: &str = "Commande enregistrée avec succès";

/// Table summary shown while a table is occupied, e.g. "2 plat(s) pour Ana"
pub fn order_summary(item_count: usize, client_name: Option<&str>) -> String {
    let who = non_blank(client_name).unwrap_or("Client");
    format!("{item_count} plat(s) pour {who}")
}

/// Check a placement request and turn it into rows ready for insertion
pub fn validate_placement(req: PlaceOrderRequest) -> AppResult<OrderPlacement> {
    let total_price = match req.total_price {
        Some(total) if total > Decimal::ZERO && fits_price_column(total) => total,
        Some(total) => {
            return Err(AppError::new(ErrorCode::InvalidTotalPrice)
                .with_detail("total_price", total.to_string()));
        }
        None => return Err(AppError::new(ErrorCode::InvalidTotalPrice)),
    };

    if req.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    let mut items = Vec::with_capacity(req.items.len());
    for (index, item) in req.items.into_iter().enumerate() {
        let Some(food_name) = non_blank(item.name.as_deref()) else {
            return Err(AppError::required(&format!("items[{index}].name")));
        };
        let price = match item.price {
            Some(price) if price >= Decimal::ZERO && fits_price_column(price) => price,
            Some(price) => {
                return Err(AppError::with_message(
                    ErrorCode::InvalidPrice,
                    format!(
                        "items[{index}].price must be between 0 and 99999999.99 with at most two decimals"
                    ),
                )
                .with_detail("price", price.to_string()));
            }
            None => return Err(AppError::required(&format!("items[{index}].price"))),
        };
        let quantity = match item.quantity {
            None => 1,
            Some(q) if q >= 1 => q,
            Some(q) => {
                return Err(AppError::with_message(
                    ErrorCode::ValueOutOfRange,
                    format!("items[{index}].quantity must be at least 1"),
                )
                .with_detail("quantity", q));
            }
        };
        items.push(NewCommandeItem {
            food_name: food_name.to_string(),
            price,
            quantity,
            image_path: item.image_path,
            supplements: item.supplements.unwrap_or_default(),
        });
    }

    Ok(OrderPlacement {
        client_name: non_blank(req.client_name.as_deref())
            .unwrap_or(DEFAULT_CLIENT_NAME)
            .to_string(),
        total_price,
        table_number: req.table_number,
        notes: req.notes,
        client_id: req.client_id,
        items,
    })
}

/// Place an order: order + commande + lines, then occupy the table
pub async fn place_order(
    repo: &dyn Repository,
    req: PlaceOrderRequest,
) -> AppResult<PlaceOrderResponse> {
    let summary = order_summary(req.items.len(), req.client_name.as_deref());
    let placement = validate_placement(req)?;
    let table_number = placement.table_number;
    let item_count = placement.items.len();

    let placed = repo.place_order(placement).await?;
    tracing::info!(
        order_id = placed.order_id,
        commande_id = placed.commande_id,
        table_number = ?table_number,
        items = item_count,
        "Order placed"
    );

    if let Some(number) = table_number {
        occupy_table(repo, number, &summary).await;
    }

    Ok(PlaceOrderResponse {
        message: PLACED_MESSAGE.to_string(),
        order_id: placed.order_id,
        commande_id: placed.commande_id,
        status: OrderStatus::Pending,
    })
}

/// Parse a status field from a request body
pub fn parse_status(status: Option<&str>) -> AppResult<OrderStatus> {
    status
        .ok_or_else(|| AppError::new(ErrorCode::InvalidOrderStatus))?
        .parse()
}

/// PUT /commandes/:id/status (an unknown id is acknowledged and changes nothing)
pub async fn set_commande_status(
    repo: &dyn Repository,
    id: i64,
    status: Option<&str>,
) -> AppResult<StatusUpdateResponse> {
    let status = parse_status(status)?;
    let commande = repo.set_commande_status(id, status).await?;
    if commande.is_none() {
        tracing::debug!(id, "Commande to update does not exist");
    }

    if status == OrderStatus::Done
        && let Some(number) = commande.and_then(|row| row.table_number)
    {
        release_table(repo, number).await;
    }

    Ok(StatusUpdateResponse {
        success: true,
        status,
    })
}

/// PUT /orders/:id/status (an unknown id is acknowledged and changes nothing)
pub async fn set_order_status(
    repo: &dyn Repository,
    id: i64,
    status: Option<&str>,
) -> AppResult<StatusUpdateResponse> {
    let status = parse_status(status)?;
    let order = repo.set_order_status(id, status).await?;
    if order.is_none() {
        tracing::debug!(id, "Order to update does not exist");
    }

    if status == OrderStatus::Done
        && let Some(number) = order.and_then(|row| row.table_number)
    {
        release_table(repo, number).await;
    }

    Ok(StatusUpdateResponse {
        success: true,
        status,
    })
}

async fn occupy_table(repo: &dyn Repository, number: i32, summary: &str) {
    match repo.occupy_table(number, summary, Utc::now()).await {
        Ok(true) => tracing::info!(table_number = number, "Table marked occupied"),
        Ok(false) => tracing::warn!(table_number = number, "Table to occupy does not exist"),
        Err(e) => tracing::warn!(table_number = number, error = %e, "Failed to occupy table"),
    }
}

async fn release_table(repo: &dyn Repository, number: i32) {
    match repo.release_table(number).await {
        Ok(true) => tracing::info!(table_number = number, "Table released"),
        Ok(false) => tracing::warn!(table_number = number, "Table to release does not exist"),
        Err(e) => tracing::warn!(table_number = number, error = %e, "Failed to release table"),
    }
}
