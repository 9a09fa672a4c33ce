//! Dining Table API module

mod handler;

pub(crate) use handler::parse_table_number;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tables", get(handler::list))
        .route("/tables/{number}", get(handler::get_by_number).put(handler::update))
        .route("/check-table/{number}", get(handler::check))
}
