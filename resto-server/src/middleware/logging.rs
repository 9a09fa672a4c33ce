//! Request logging middleware
//!
//! One line when a request arrives and one when it is answered. Server
//! failures are already reported at error level by `AppError`.

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Coarse outcome of a response, recorded as the `outcome` field
fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server_error"
    } else if status.is_client_error() {
        "rejected"
    } else {
        "ok"
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    tracing::debug!(%request_id, %method, %route, "Request received");

    let response = next.run(req).await;
    let status = response.status();

    tracing::info!(
        %request_id,
        %method,
        %route,
        status = status.as_u16(),
        outcome = outcome(status),
        latency_ms = start.elapsed().as_millis() as u64,
        "Request answered"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_by_status_class() {
        assert_eq!(outcome(StatusCode::OK), "ok");
        assert_eq!(outcome(StatusCode::CREATED), "ok");
        assert_eq!(outcome(StatusCode::BAD_REQUEST), "rejected");
        assert_eq!(outcome(StatusCode::CONFLICT), "rejected");
        assert_eq!(outcome(StatusCode::INTERNAL_SERVER_ERROR), "server_error");
    }
}
