//! Categories

use async_trait::async_trait;
use shared::models::Category;

use super::PgRepository;
use crate::db::{CategoryRepository, RepoResult};

#[async_trait]
impl CategoryRepository for PgRepository {
    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn category_name_taken(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(taken)
    }

    async fn create_category(&self, name: &str) -> RepoResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_category(&self, id: i64, name: &str) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_category(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
