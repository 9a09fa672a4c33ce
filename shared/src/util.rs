//! Small helpers shared by models and handlers

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, de};
use std::str::FromStr;

/// Deserialize an optional price sent either as a JSON number or as a
/// numeric string (`25.5` and `"25.5"` are both accepted).
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Int(n)) => Ok(Some(Decimal::from(n))),
        Some(NumberOrText::Float(f)) => Decimal::from_f64(f)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("price out of range: {f}"))),
        Some(NumberOrText::Text(s)) => Decimal::from_str(s.trim())
            .map(Some)
            .map_err(|_| de::Error::custom(format!("price is not a number: {s:?}"))),
    }
}

/// Whether `amount` is stored unchanged by a `NUMERIC(10, 2)` column:
/// at most two decimals and below 100 000 000 in absolute value
pub fn fits_price_column(amount: Decimal) -> bool {
    amount.normalize().scale() <= 2 && amount.abs() < Decimal::from(100_000_000)
}

/// Trim a text field and drop it when nothing is left
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
