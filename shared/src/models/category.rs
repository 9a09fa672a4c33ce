//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Create / update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: Option<String>,
}
