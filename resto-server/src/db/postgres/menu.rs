//! Menu items, daily special and promotions

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::models::{MenuItem, MenuItemUpdate, NewMenuItem};
use sqlx::types::Json;

use super::PgRepository;
use crate::db::{MenuRepository, RepoResult};

macro_rules! menu_columns {
    () => {
        "id, name, category, price, description, image_path, supplements, \
         is_daily_special, discount_price, is_featured_promotion, \
         original_price, discounted_price, created_at"
    };
}

/// Advisory lock key held while the daily special moves
const DAILY_SPECIAL_LOCK: i64 = 0x6d65_6e75_0001;

#[async_trait]
impl MenuRepository for PgRepository {
    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItem>(concat!(
            "SELECT ",
            menu_columns!(),
            " FROM menu ORDER BY category, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_menu_item(&self, item: NewMenuItem) -> RepoResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItem>(concat!(
            "INSERT INTO menu (name, category, price, description, image_path, supplements) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING ",
            menu_columns!()
        ))
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.description)
        .bind(&item.image_path)
        .bind(Json(&item.supplements))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_menu_item(&self, id: i64, update: MenuItemUpdate) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE menu SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                price = COALESCE($4, price),
                description = COALESCE($5, description),
                image_path = COALESCE($6, image_path),
                supplements = COALESCE($7, supplements)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.category)
        .bind(update.price)
        .bind(&update.description)
        .bind(&update.image_path)
        .bind(update.supplements.as_ref().map(Json))
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_menu_item(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM menu WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_daily_special(&self) -> RepoResult<Option<MenuItem>> {
        let row = sqlx::query_as::<_, MenuItem>(concat!(
            "SELECT ",
            menu_columns!(),
            " FROM menu WHERE is_daily_special LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_promotional_items(&self) -> RepoResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItem>(concat!(
            "SELECT ",
            menu_columns!(),
            " FROM menu WHERE is_featured_promotion ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn set_daily_special(
        &self,
        id: i64,
        discount_price: Option<Decimal>,
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await?;

        // One move at a time: interleaved moves trip the single-special index
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(DAILY_SPECIAL_LOCK)
            .execute(&mut *tx)
            .await?;

        let target: Option<(i64,)> = sqlx::query_as("SELECT id FROM menu WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if target.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "UPDATE menu SET is_daily_special = FALSE, discount_price = NULL WHERE is_daily_special",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE menu SET is_daily_special = TRUE, discount_price = $2 WHERE id = $1")
            .bind(id)
            .bind(discount_price)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn clear_daily_special(&self) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(DAILY_SPECIAL_LOCK)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "UPDATE menu SET is_daily_special = FALSE, discount_price = NULL WHERE is_daily_special",
        )
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn set_promotion(
        &self,
        id: i64,
        original_price: Decimal,
        discounted_price: Decimal,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE menu SET is_featured_promotion = TRUE, original_price = $2, discounted_price = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(original_price)
        .bind(discounted_price)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear_promotion(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE menu SET is_featured_promotion = FALSE, original_price = NULL, discounted_price = NULL WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
