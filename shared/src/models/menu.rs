//! Menu Item Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::supplement::SupplementLine;

/// Image used when a menu item is created without one
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Menu item entity
///
/// `category` holds the category *name*; there is no foreign key to
/// `categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: String,
    pub image_path: String,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub supplements: Vec<SupplementLine>,

    // -- Daily special (at most one row) --
    pub is_daily_special: bool,
    pub discount_price: Option<Decimal>,

    // -- Featured promotion (any number of rows) --
    pub is_featured_promotion: bool,
    pub original_price: Option<Decimal>,
    pub discounted_price: Option<Decimal>,

    pub created_at: DateTime<Utc>,
}

/// Create menu item payload (fields checked by the handler)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::util::lenient_decimal")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    #[serde(default)]
    pub supplements: Vec<SupplementLine>,
}

/// Validated menu item ready for insertion
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub description: String,
    pub image_path: String,
    pub supplements: Vec<SupplementLine>,
}

/// Update menu item payload (absent fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "crate::util::lenient_decimal")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub supplements: Option<Vec<SupplementLine>>,
}
