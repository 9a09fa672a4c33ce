//! Unified error system for the resto backend
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON body of error responses
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "name is required")
//!     .with_detail("field", "name");
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod rejection;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
