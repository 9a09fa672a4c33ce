//! Order API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders/{id}", get(handler::get_by_id))
        .route("/orders/{id}/status", put(handler::update_status))
}
