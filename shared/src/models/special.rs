//! Daily special and featured promotion payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::menu::MenuItem;

/// GET /specials response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialsOverview {
    pub daily_special: Option<MenuItem>,
    pub promotional_items: Vec<MenuItem>,
}

/// PUT /specials/daily payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySpecialRequest {
    pub food_item_id: Option<i64>,
    pub discounted_price: Option<Decimal>,
}

/// PUT /specials/promotional payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionRequest {
    pub food_item_id: Option<i64>,
    pub original_price: Option<Decimal>,
    pub discounted_price: Option<Decimal>,
}
