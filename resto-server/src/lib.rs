//! resto-server: restaurant ordering backend
//!
//! REST endpoints over PostgreSQL for the menu, categories, tables,
//! orders and commandes, specials and supplements.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod services;
pub mod state;

pub use api::build_app;
pub use config::Config;
pub use state::AppState;
