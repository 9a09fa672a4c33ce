//! PostgreSQL repository (sqlx)

mod category;
mod menu;
mod order;
mod supplement;
mod table;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use super::{RepoResult, Repository};

/// Repository backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    /// Connect and apply the embedded migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> RepoResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        let repo = Self::from_pool(pool).await?;
        tracing::info!(max_connections, "Database ready, migrations applied");
        Ok(repo)
    }

    /// Wrap an existing pool, applying the embedded migrations first
    pub async fn from_pool(pool: PgPool) -> RepoResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
