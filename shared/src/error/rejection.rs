//! Axum extractor rejections as `AppError`s
//!
//! Every malformed request (bad JSON, wrong content type, unparsable path or
//! query) becomes a 400 with the same JSON body as any other error.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use super::types::AppError;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) => AppError::invalid_format(rejection.body_text()),
            _ => AppError::invalid_request(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::invalid_format(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_request(rejection.body_text())
    }
}
