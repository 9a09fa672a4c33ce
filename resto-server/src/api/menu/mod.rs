//! Menu API module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/menu", get(handler::list).post(handler::create))
        .route("/menu/{id}", axum::routing::put(handler::update).delete(handler::delete))
}
