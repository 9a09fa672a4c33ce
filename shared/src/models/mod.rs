//! Data models
//!
//! Shared between resto-server handlers and repositories.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (Postgres BIGSERIAL); table numbers are `i32`.

pub mod category;
pub mod dining_table;
pub mod menu;
pub mod order;
pub mod special;
pub mod supplement;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use menu::*;
pub use order::*;
pub use special::*;
pub use supplement::*;
