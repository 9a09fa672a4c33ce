//! Specials API module (daily special and featured promotions)

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/specials", get(handler::overview))
        .route(
            "/specials/daily",
            put(handler::set_daily).delete(handler::clear_daily),
        )
        .route("/specials/promotional", put(handler::set_promotion))
        .route("/specials/promotional/{id}", delete(handler::clear_promotion))
}
