//! Test harness: the full router over a repository (in-memory by default)

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use resto_server::config::DEFAULT_CORS_ORIGINS;
use resto_server::db::{MemoryRepository, Repository};
use resto_server::{AppState, build_app};
use serde_json::Value;
use tower::ServiceExt;

#[derive(Clone)]
pub struct TestApp<R = MemoryRepository> {
    pub router: Router,
    pub repo: R,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repo(MemoryRepository::new())
    }
}

impl<R: Repository + Clone + 'static> TestApp<R> {
    pub fn with_repo(repo: R) -> Self {
        let state = AppState::with_repository(Arc::new(repo.clone()));
        let origins: Vec<String> = DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect();
        Self {
            router: build_app(state, &origins),
            repo,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send a request with an optional JSON body; returns status and parsed body
    /// (non-JSON bodies come back as a JSON string)
    pub async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.send(request).await;
        let status = response.status();
        (status, read_json(response).await)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call("DELETE", uri, None).await
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}
