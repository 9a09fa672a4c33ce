//! Supplements

use async_trait::async_trait;
use shared::models::{Supplement, SupplementPayload};

use super::PgRepository;
use crate::db::{RepoResult, SupplementRepository};

#[async_trait]
impl SupplementRepository for PgRepository {
    async fn list_supplements(&self) -> RepoResult<Vec<Supplement>> {
        let rows =
            sqlx::query_as::<_, Supplement>("SELECT id, name, price FROM supplements ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn create_supplement(&self, data: SupplementPayload) -> RepoResult<Supplement> {
        let row = sqlx::query_as::<_, Supplement>(
            "INSERT INTO supplements (name, price) VALUES ($1, $2) RETURNING id, name, price",
        )
        .bind(&data.name)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_supplement(
        &self,
        id: i64,
        data: SupplementPayload,
    ) -> RepoResult<Option<Supplement>> {
        let row = sqlx::query_as::<_, Supplement>(
            "UPDATE supplements SET name = $2, price = $3 WHERE id = $1 RETURNING id, name, price",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.price)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_supplement(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM supplements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
