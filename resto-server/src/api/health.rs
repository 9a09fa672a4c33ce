//! Service root and health check

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// GET / - plain-text banner
async fn root() -> &'static str {
    "Resto backend is running"
}

/// GET /health - service status and database reachability
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = match state.repo.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            "unreachable"
        }
    };

    Json(json!({
        "status": "ok",
        "service": "resto-server",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    }))
}
