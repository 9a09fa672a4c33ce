//! Supplement API module

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/supplements", get(handler::list).post(handler::create))
        .route(
            "/supplements/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
}
