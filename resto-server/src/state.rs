//! Application state

use std::sync::Arc;

use crate::config::{BoxError, Config};
use crate::db::{PgRepository, Repository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway (PostgreSQL in production, in-memory in tests)
    pub repo: Arc<dyn Repository>,
}

impl AppState {
    /// Connect to PostgreSQL and apply migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let repo =
            PgRepository::connect(&config.database_url, config.database_max_connections).await?;
        Ok(Self::with_repository(Arc::new(repo)))
    }

    pub fn with_repository(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }
}
