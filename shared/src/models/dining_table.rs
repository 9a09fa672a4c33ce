//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Occupancy status of a physical table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "table_status", rename_all = "snake_case")
)]
pub enum TableStatus {
    Free,
    Occupied,
}

impl TableStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Free => "free",
            TableStatus::Occupied => "occupied",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(TableStatus::Free),
            "occupied" => Ok(TableStatus::Occupied),
            other => Err(AppError::new(ErrorCode::InvalidTableStatus).with_detail("status", other)),
        }
    }
}

/// Dining table entity, addressed by its `number`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub number: i32,
    pub status: TableStatus,
    pub order_summary: Option<String>,
    pub time_occupied: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// PUT /tables/:number payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableUpdate {
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// GET /check-table/:number response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusView {
    pub status: TableStatus,
}
