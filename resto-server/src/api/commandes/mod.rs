//! Commande API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/commandes", get(handler::list).post(handler::place))
        .route("/commandes/{id}/status", put(handler::update_status))
        .route("/commandes_with_items", get(handler::list_with_items))
}
