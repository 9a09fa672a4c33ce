//! Supplement Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supplement entity (extra cheese, sauce, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Supplement {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

/// Create / update supplement payload (both routes take the full record)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementPayload {
    pub name: String,
    pub price: Decimal,
}

/// Supplement stored by value inside a menu item or a commande line.
///
/// Not a foreign key: renaming or deleting a [`Supplement`] leaves existing
/// copies untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
}
