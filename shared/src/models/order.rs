//! Order / Commande Models
//!
//! An `Order` is the front-of-house record (who, which table); the matching
//! `Commande` is the billing and kitchen record that owns the line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::supplement::SupplementLine;
use crate::error::{AppError, ErrorCode};

/// Client name used when an order is placed without one
pub const DEFAULT_CLIENT_NAME: &str = "Client sur place";

/// Preparation status shared by orders and commandes
///
/// Transitions are expected to go pending → in_progress → done, but any value
/// may be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "order_status", rename_all = "snake_case")
)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Done,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Done => "done",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "in_progress" => Ok(OrderStatus::InProgress),
            "done" => Ok(OrderStatus::Done),
            other => Err(AppError::new(ErrorCode::InvalidOrderStatus).with_detail("status", other)),
        }
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub client_name: String,
    pub table_number: Option<i32>,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Commande entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Commande {
    pub id: i64,
    pub order_id: i64,
    pub client_name: String,
    pub total_price: Decimal,
    pub table_number: Option<i32>,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub client_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Commande line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CommandeItem {
    pub id: i64,
    pub commande_id: i64,
    pub food_name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub image_path: Option<String>,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub supplements: Vec<SupplementLine>,
}

/// Commande with every column of its line items (GET /commandes_with_items)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandeWithItems {
    #[serde(flatten)]
    pub commande: Commande,
    pub items: Vec<CommandeItem>,
}

/// Short item view used by GET /commandes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLine {
    pub food_name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// Commande with short item lines (GET /commandes, GET /client-order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandeSummary {
    #[serde(flatten)]
    pub commande: Commande,
    pub items: Vec<ItemLine>,
}

impl From<CommandeWithItems> for CommandeSummary {
    fn from(full: CommandeWithItems) -> Self {
        Self {
            commande: full.commande,
            items: full
                .items
                .into_iter()
                .map(|item| ItemLine {
                    food_name: item.food_name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

// ── Order placement ──

/// POST /commandes payload (fields checked by the ordering service)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub client_name: Option<String>,
    pub total_price: Option<Decimal>,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
    pub table_number: Option<i32>,
    pub notes: Option<String>,
    pub client_id: Option<String>,
}

/// One submitted line of a placement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub image_path: Option<String>,
    pub supplements: Option<Vec<SupplementLine>>,
}

/// Validated line ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewCommandeItem {
    pub food_name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub image_path: Option<String>,
    pub supplements: Vec<SupplementLine>,
}

/// Validated placement: one order, one commande and its lines
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlacement {
    pub client_name: String,
    pub total_price: Decimal,
    pub table_number: Option<i32>,
    pub notes: Option<String>,
    pub client_id: Option<String>,
    pub items: Vec<NewCommandeItem>,
}

/// Identifiers produced by a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: i64,
    pub commande_id: i64,
}

/// POST /commandes response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_id: i64,
    pub commande_id: i64,
    pub status: OrderStatus,
}

/// PUT /commandes/:id/status and PUT /orders/:id/status payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
}

/// Status change response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub status: OrderStatus,
}

/// GET /client-order query string (validated by the handler)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientOrderQuery {
    pub client_name: Option<String>,
    pub table_number: Option<String>,
}
