//! Shared types for the resto backend
//!
//! Error codes, the API error body, and the data models exchanged between
//! the HTTP layer and the repositories.

pub mod error;
pub mod models;
pub mod util;
