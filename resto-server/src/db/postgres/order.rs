//! Orders, commandes and commande lines

use async_trait::async_trait;
use shared::models::{
    Commande, CommandeItem, CommandeWithItems, Order, OrderPlacement, OrderStatus, PlacedOrder,
};
use sqlx::types::Json;
use std::collections::HashMap;

use super::PgRepository;
use crate::db::{OrderRepository, RepoResult};

macro_rules! commande_columns {
    () => {
        "id, order_id, client_name, total_price, table_number, notes, status, client_id, created_at"
    };
}

impl PgRepository {
    /// Load the lines of the given commandes, grouped by commande id
    async fn items_by_commande(
        &self,
        commande_ids: &[i64],
    ) -> RepoResult<HashMap<i64, Vec<CommandeItem>>> {
        let rows = sqlx::query_as::<_, CommandeItem>(
            r#"
            SELECT id, commande_id, food_name, price, quantity, image_path, supplements
            FROM commande_items
            WHERE commande_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(commande_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i64, Vec<CommandeItem>> = HashMap::new();
        for item in rows {
            grouped.entry(item.commande_id).or_default().push(item);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl OrderRepository for PgRepository {
    async fn place_order(&self, placement: OrderPlacement) -> RepoResult<PlacedOrder> {
        let mut tx = self.pool.begin().await?;

        let (order_id,): (i64,) = sqlx::query_as(
            "INSERT INTO orders (client_name, table_number, notes, status) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&placement.client_name)
        .bind(placement.table_number)
        .bind(&placement.notes)
        .bind(OrderStatus::Pending)
        .fetch_one(&mut *tx)
        .await?;

        let (commande_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO commandes (order_id, client_name, total_price, table_number, notes, status, client_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(order_id)
        .bind(&placement.client_name)
        .bind(placement.total_price)
        .bind(placement.table_number)
        .bind(&placement.notes)
        .bind(OrderStatus::Pending)
        .bind(&placement.client_id)
        .fetch_one(&mut *tx)
        .await?;

        for item in &placement.items {
            sqlx::query(
                r#"
                INSERT INTO commande_items (commande_id, food_name, price, quantity, image_path, supplements)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(commande_id)
            .bind(&item.food_name)
            .bind(item.price)
            .bind(item.quantity)
            .bind(&item.image_path)
            .bind(Json(&item.supplements))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(PlacedOrder {
            order_id,
            commande_id,
        })
    }

    async fn find_order(&self, id: i64) -> RepoResult<Option<Order>> {
        let row = sqlx::query_as::<_, Order>(
            "SELECT id, client_name, table_number, notes, status, created_at FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn set_order_status(&self, id: i64, status: OrderStatus) -> RepoResult<Option<Order>> {
        let row = sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING id, client_name, table_number, notes, status, created_at",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn set_commande_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> RepoResult<Option<Commande>> {
        let row = sqlx::query_as::<_, Commande>(concat!(
            "UPDATE commandes SET status = $2 WHERE id = $1 RETURNING ",
            commande_columns!()
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_commandes(&self) -> RepoResult<Vec<CommandeWithItems>> {
        let commandes = sqlx::query_as::<_, Commande>(concat!(
            "SELECT ",
            commande_columns!(),
            " FROM commandes ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<i64> = commandes.iter().map(|c| c.id).collect();
        let mut items = self.items_by_commande(&ids).await?;

        Ok(commandes
            .into_iter()
            .map(|commande| CommandeWithItems {
                items: items.remove(&commande.id).unwrap_or_default(),
                commande,
            })
            .collect())
    }

    async fn find_latest_commande(
        &self,
        client_name: &str,
        table_number: i32,
    ) -> RepoResult<Option<CommandeWithItems>> {
        let Some(commande) = sqlx::query_as::<_, Commande>(concat!(
            "SELECT ",
            commande_columns!(),
            " FROM commandes WHERE client_name = $1 AND table_number = $2",
            " ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .bind(client_name)
        .bind(table_number)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let mut items = self.items_by_commande(&[commande.id]).await?;
        Ok(Some(CommandeWithItems {
            items: items.remove(&commande.id).unwrap_or_default(),
            commande,
        }))
    }
}
