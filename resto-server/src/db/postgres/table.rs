//! Dining tables, addressed by number

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{DiningTable, TableStatus};

use super::PgRepository;
use crate::db::{RepoResult, TableRepository};

#[async_trait]
impl TableRepository for PgRepository {
    async fn list_tables(&self) -> RepoResult<Vec<DiningTable>> {
        let rows = sqlx::query_as::<_, DiningTable>(
            "SELECT id, number, status, order_summary, time_occupied, notes FROM tables ORDER BY number",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_table(&self, number: i32) -> RepoResult<Option<DiningTable>> {
        let row = sqlx::query_as::<_, DiningTable>(
            "SELECT id, number, status, order_summary, time_occupied, notes FROM tables WHERE number = $1",
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_table(
        &self,
        number: i32,
        status: TableStatus,
        notes: Option<String>,
    ) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE tables SET status = $2, notes = $3 WHERE number = $1")
            .bind(number)
            .bind(status)
            .bind(notes)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn occupy_table(
        &self,
        number: i32,
        summary: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE tables SET status = $2, order_summary = $3, time_occupied = $4 WHERE number = $1",
        )
        .bind(number)
        .bind(TableStatus::Occupied)
        .bind(summary)
        .bind(since)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn release_table(&self, number: i32) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE tables SET status = $2, order_summary = NULL, time_occupied = NULL WHERE number = $1",
        )
        .bind(number)
        .bind(TableStatus::Free)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
