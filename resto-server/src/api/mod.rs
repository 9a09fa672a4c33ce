//! HTTP API
//!
//! One sub-module per resource, each exposing a `router()`; [`build_app`]
//! merges them and installs the middleware stack.

pub mod categories;
pub mod client_order;
pub mod commandes;
pub mod extract;
pub mod health;
pub mod menu;
pub mod orders;
pub mod specials;
pub mod supplements;
pub mod tables;

use std::any::Any;

use axum::Router;
use axum::middleware as axum_middleware;
use axum::response::{IntoResponse, Response};
use http::{HeaderName, HeaderValue, Method, header};
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// `{"success": true}` acknowledgement, optionally with a message
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: &'static str) -> Self {
        Self {
            success: true,
            message: Some(message),
        }
    }
}

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(categories::router())
        .merge(tables::router())
        .merge(commandes::router())
        .merge(orders::router())
        .merge(client_order::router())
        .merge(specials::router())
        .merge(supplements::router())
        .fallback(fallback)
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    build_router()
        // Panics become 500 JSON bodies
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors_origins))
        // Request logging (sees the request id set below)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

/// CORS whitelist; a `*` entry allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_origin(AnyOrigin);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

async fn fallback() -> AppError {
    AppError::with_message(ErrorCode::NotFound, "Route not found")
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");
    AppError::internal("Internal server error").into_response()
}
