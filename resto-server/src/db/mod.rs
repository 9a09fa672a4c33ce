//! Repository Module
//!
//! Per-resource repository traits combined into [`Repository`], with a
//! PostgreSQL implementation ([`PgRepository`]) and an in-memory one
//! ([`MemoryRepository`]) for tests.

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{
    Category, Commande, CommandeWithItems, DiningTable, MenuItem, MenuItemUpdate, NewMenuItem,
    Order, OrderPlacement, OrderStatus, PlacedOrder, Supplement, SupplementPayload, TableStatus,
};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for RepoError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// Write operations addressed by id return `false` when no row matched.

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All items, ordered by category then id
    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>>;
    async fn create_menu_item(&self, item: NewMenuItem) -> RepoResult<MenuItem>;
    async fn update_menu_item(&self, id: i64, update: MenuItemUpdate) -> RepoResult<bool>;
    async fn delete_menu_item(&self, id: i64) -> RepoResult<bool>;

    async fn find_daily_special(&self) -> RepoResult<Option<MenuItem>>;
    async fn list_promotional_items(&self) -> RepoResult<Vec<MenuItem>>;
    /// Move the daily-special flag to `id` atomically. On `false` the
    /// previous holder keeps the flag.
    async fn set_daily_special(&self, id: i64, discount_price: Option<Decimal>)
    -> RepoResult<bool>;
    async fn clear_daily_special(&self) -> RepoResult<()>;
    async fn set_promotion(
        &self,
        id: i64,
        original_price: Decimal,
        discounted_price: Decimal,
    ) -> RepoResult<bool>;
    async fn clear_promotion(&self, id: i64) -> RepoResult<bool>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, alphabetical
    async fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Exact (case-sensitive) name match, optionally ignoring one record
    async fn category_name_taken(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;
    async fn create_category(&self, name: &str) -> RepoResult<Category>;
    async fn update_category(&self, id: i64, name: &str) -> RepoResult<bool>;
    async fn delete_category(&self, id: i64) -> RepoResult<bool>;
}

#[async_trait]
pub trait TableRepository: Send + Sync {
    /// All tables, ordered by number
    async fn list_tables(&self) -> RepoResult<Vec<DiningTable>>;
    async fn find_table(&self, number: i32) -> RepoResult<Option<DiningTable>>;
    /// Overwrite status and notes
    async fn update_table(
        &self,
        number: i32,
        status: TableStatus,
        notes: Option<String>,
    ) -> RepoResult<bool>;
    async fn occupy_table(
        &self,
        number: i32,
        summary: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<bool>;
    /// Set `free` and clear summary and occupancy time
    async fn release_table(&self, number: i32) -> RepoResult<bool>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order, its commande and every line in one transaction
    async fn place_order(&self, placement: OrderPlacement) -> RepoResult<PlacedOrder>;
    async fn find_order(&self, id: i64) -> RepoResult<Option<Order>>;
    /// Returns the updated row, `None` when the id is unknown
    async fn set_order_status(&self, id: i64, status: OrderStatus) -> RepoResult<Option<Order>>;
    async fn set_commande_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> RepoResult<Option<Commande>>;
    /// Every commande with its lines, newest first
    async fn list_commandes(&self) -> RepoResult<Vec<CommandeWithItems>>;
    /// Most recent commande for a client at a table
    async fn find_latest_commande(
        &self,
        client_name: &str,
        table_number: i32,
    ) -> RepoResult<Option<CommandeWithItems>>;
}

#[async_trait]
pub trait SupplementRepository: Send + Sync {
    /// All supplements, ordered by name
    async fn list_supplements(&self) -> RepoResult<Vec<Supplement>>;
    async fn create_supplement(&self, data: SupplementPayload) -> RepoResult<Supplement>;
    async fn update_supplement(
        &self,
        id: i64,
        data: SupplementPayload,
    ) -> RepoResult<Option<Supplement>>;
    async fn delete_supplement(&self, id: i64) -> RepoResult<bool>;
}

/// Every resource repository plus a liveness check
#[async_trait]
pub trait Repository:
    MenuRepository + CategoryRepository + TableRepository + OrderRepository + SupplementRepository
{
    async fn ping(&self) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_display() {
        let err = RepoError::Duplicate("categories_name_key".into());
        assert_eq!(err.to_string(), "Duplicate: categories_name_key");
        let err = RepoError::Database("connection refused".into());
        assert_eq!(err.to_string(), "Database error: connection refused");
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        let err = RepoError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepoError::Database(_)));
    }
}
