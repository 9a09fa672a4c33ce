//! In-memory repository implementation.
//!
//! Stores every resource in `Vec`s behind a single lock, which makes each
//! operation atomic. Backs the test suite; table writes can be made to fail on
//! demand to exercise the best-effort occupancy paths.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;

use shared::models::{
    Category, Commande, CommandeItem, CommandeWithItems, DiningTable, MenuItem, MenuItemUpdate,
    NewMenuItem, Order, OrderPlacement, OrderStatus, PlacedOrder, Supplement, SupplementPayload,
    TableStatus,
};

use super::{
    CategoryRepository, MenuRepository, OrderRepository, RepoError, RepoResult, Repository,
    SupplementRepository, TableRepository,
};

/// In-memory repository.
///
/// # Example
/// ```
/// use resto_server::db::{MemoryRepository, TableRepository};
///
/// let repo = MemoryRepository::new();
/// repo.seed_table(4);
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let table = rt.block_on(repo.find_table(4)).unwrap();
/// assert!(table.is_some());
/// ```
#[derive(Clone, Default)]
pub struct MemoryRepository {
    data: Arc<RwLock<MemoryData>>,
}

#[derive(Default)]
struct MemoryData {
    menu: Vec<MenuItem>,
    categories: Vec<Category>,
    tables: Vec<DiningTable>,
    orders: Vec<Order>,
    commandes: Vec<Commande>,
    commande_items: Vec<CommandeItem>,
    supplements: Vec<Supplement>,

    // ID counter shared by every collection
    last_id: i64,

    fail_table_writes: bool,
}

impl MemoryData {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn check_table_writes(&self) -> RepoResult<()> {
        if self.fail_table_writes {
            return Err(RepoError::Database("table writes are disabled".into()));
        }
        Ok(())
    }

    fn table_mut(&mut self, number: i32) -> Option<&mut DiningTable> {
        self.tables.iter_mut().find(|t| t.number == number)
    }

    fn with_items(&self, commande: &Commande) -> CommandeWithItems {
        CommandeWithItems {
            commande: commande.clone(),
            items: self
                .commande_items
                .iter()
                .filter(|item| item.commande_id == commande.id)
                .cloned()
                .collect(),
        }
    }
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free table with the given number (no-op if it already exists)
    pub fn seed_table(&self, number: i32) -> DiningTable {
        let mut data = self.data.write();
        if let Some(existing) = data.tables.iter().find(|t| t.number == number) {
            return existing.clone();
        }
        let table = DiningTable {
            id: data.next_id(),
            number,
            status: TableStatus::Free,
            order_summary: None,
            time_occupied: None,
            notes: None,
        };
        data.tables.push(table.clone());
        data.tables.sort_by_key(|t| t.number);
        table
    }

    /// Make every subsequent table write fail with a database error
    pub fn fail_table_writes(&self, fail: bool) {
        self.data.write().fail_table_writes = fail;
    }
}

#[async_trait]
impl MenuRepository for MemoryRepository {
    async fn list_menu_items(&self) -> RepoResult<Vec<MenuItem>> {
        let mut items = self.data.read().menu.clone();
        items.sort_by(|a, b| a.category.cmp(&b.category).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn create_menu_item(&self, item: NewMenuItem) -> RepoResult<MenuItem> {
        let mut data = self.data.write();
        let row = MenuItem {
            id: data.next_id(),
            name: item.name,
            category: item.category,
            price: item.price,
            description: item.description,
            image_path: item.image_path,
            supplements: item.supplements,
            is_daily_special: false,
            discount_price: None,
            is_featured_promotion: false,
            original_price: None,
            discounted_price: None,
            created_at: Utc::now(),
        };
        data.menu.push(row.clone());
        Ok(row)
    }

    async fn update_menu_item(&self, id: i64, update: MenuItemUpdate) -> RepoResult<bool> {
        let mut data = self.data.write();
        let Some(item) = data.menu.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(price) = update.price {
            item.price = price;
        }
        if let Some(description) = update.description {
            item.description = description;
        }
        if let Some(image_path) = update.image_path {
            item.image_path = image_path;
        }
        if let Some(supplements) = update.supplements {
            item.supplements = supplements;
        }
        Ok(true)
    }

    async fn delete_menu_item(&self, id: i64) -> RepoResult<bool> {
        let mut data = self.data.write();
        let before = data.menu.len();
        data.menu.retain(|m| m.id != id);
        Ok(data.menu.len() < before)
    }

    async fn find_daily_special(&self) -> RepoResult<Option<MenuItem>> {
        Ok(self
            .data
            .read()
            .menu
            .iter()
            .find(|m| m.is_daily_special)
            .cloned())
    }

    async fn list_promotional_items(&self) -> RepoResult<Vec<MenuItem>> {
        Ok(self
            .data
            .read()
            .menu
            .iter()
            .filter(|m| m.is_featured_promotion)
            .cloned()
            .collect())
    }

    async fn set_daily_special(
        &self,
        id: i64,
        discount_price: Option<Decimal>,
    ) -> RepoResult<bool> {
        let mut data = self.data.write();
        if !data.menu.iter().any(|m| m.id == id) {
            return Ok(false);
        }
        for item in data.menu.iter_mut() {
            if item.id == id {
                item.is_daily_special = true;
                item.discount_price = discount_price;
            } else if item.is_daily_special {
                item.is_daily_special = false;
                item.discount_price = None;
            }
        }
        Ok(true)
    }

    async fn clear_daily_special(&self) -> RepoResult<()> {
        let mut data = self.data.write();
        for item in data.menu.iter_mut().filter(|m| m.is_daily_special) {
            item.is_daily_special = false;
            item.discount_price = None;
        }
        Ok(())
    }

    async fn set_promotion(
        &self,
        id: i64,
        original_price: Decimal,
        discounted_price: Decimal,
    ) -> RepoResult<bool> {
        let mut data = self.data.write();
        let Some(item) = data.menu.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        item.is_featured_promotion = true;
        item.original_price = Some(original_price);
        item.discounted_price = Some(discounted_price);
        Ok(true)
    }

    async fn clear_promotion(&self, id: i64) -> RepoResult<bool> {
        let mut data = self.data.write();
        let Some(item) = data.menu.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        item.is_featured_promotion = false;
        item.original_price = None;
        item.discounted_price = None;
        Ok(true)
    }
}

#[async_trait]
impl CategoryRepository for MemoryRepository {
    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut rows = self.data.read().categories.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn category_name_taken(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self
            .data
            .read()
            .categories
            .iter()
            .any(|c| c.name == name && Some(c.id) != exclude_id))
    }

    async fn create_category(&self, name: &str) -> RepoResult<Category> {
        let mut data = self.data.write();
        if data.categories.iter().any(|c| c.name == name) {
            return Err(RepoError::Duplicate(format!("category {name}")));
        }
        let row = Category {
            id: data.next_id(),
            name: name.to_string(),
        };
        data.categories.push(row.clone());
        Ok(row)
    }

    async fn update_category(&self, id: i64, name: &str) -> RepoResult<bool> {
        let mut data = self.data.write();
        if data.categories.iter().any(|c| c.name == name && c.id != id) {
            return Err(RepoError::Duplicate(format!("category {name}")));
        }
        let Some(row) = data.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        row.name = name.to_string();
        Ok(true)
    }

    async fn delete_category(&self, id: i64) -> RepoResult<bool> {
        let mut data = self.data.write();
        let before = data.categories.len();
        data.categories.retain(|c| c.id != id);
        Ok(data.categories.len() < before)
    }
}

#[async_trait]
impl TableRepository for MemoryRepository {
    async fn list_tables(&self) -> RepoResult<Vec<DiningTable>> {
        Ok(self.data.read().tables.clone())
    }

    async fn find_table(&self, number: i32) -> RepoResult<Option<DiningTable>> {
        Ok(self
            .data
            .read()
            .tables
            .iter()
            .find(|t| t.number == number)
            .cloned())
    }

    async fn update_table(
        &self,
        number: i32,
        status: TableStatus,
        notes: Option<String>,
    ) -> RepoResult<bool> {
        let mut data = self.data.write();
        data.check_table_writes()?;
        let Some(table) = data.table_mut(number) else {
            return Ok(false);
        };
        table.status = status;
        table.notes = notes;
        Ok(true)
    }

    async fn occupy_table(
        &self,
        number: i32,
        summary: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let mut data = self.data.write();
        data.check_table_writes()?;
        let Some(table) = data.table_mut(number) else {
            return Ok(false);
        };
        table.status = TableStatus::Occupied;
        table.order_summary = Some(summary.to_string());
        table.time_occupied = Some(since);
        Ok(true)
    }

    async fn release_table(&self, number: i32) -> RepoResult<bool> {
        let mut data = self.data.write();
        data.check_table_writes()?;
        let Some(table) = data.table_mut(number) else {
            return Ok(false);
        };
        table.status = TableStatus::Free;
        table.order_summary = None;
        table.time_occupied = None;
        Ok(true)
    }
}

#[async_trait]
impl OrderRepository for MemoryRepository {
    async fn place_order(&self, placement: OrderPlacement) -> RepoResult<PlacedOrder> {
        let mut data = self.data.write();
        let now = Utc::now();

        let order_id = data.next_id();
        data.orders.push(Order {
            id: order_id,
            client_name: placement.client_name.clone(),
            table_number: placement.table_number,
            notes: placement.notes.clone(),
            status: OrderStatus::Pending,
            created_at: now,
        });

        let commande_id = data.next_id();
        data.commandes.push(Commande {
            id: commande_id,
            order_id,
            client_name: placement.client_name,
            total_price: placement.total_price,
            table_number: placement.table_number,
            notes: placement.notes,
            status: OrderStatus::Pending,
            client_id: placement.client_id,
            created_at: now,
        });

        for item in placement.items {
            let id = data.next_id();
            data.commande_items.push(CommandeItem {
                id,
                commande_id,
                food_name: item.food_name,
                price: item.price,
                quantity: item.quantity,
                image_path: item.image_path,
                supplements: item.supplements,
            });
        }

        Ok(PlacedOrder {
            order_id,
            commande_id,
        })
    }

    async fn find_order(&self, id: i64) -> RepoResult<Option<Order>> {
        Ok(self.data.read().orders.iter().find(|o| o.id == id).cloned())
    }

    async fn set_order_status(&self, id: i64, status: OrderStatus) -> RepoResult<Option<Order>> {
        let mut data = self.data.write();
        Ok(data.orders.iter_mut().find(|o| o.id == id).map(|order| {
            order.status = status;
            order.clone()
        }))
    }

    async fn set_commande_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> RepoResult<Option<Commande>> {
        let mut data = self.data.write();
        Ok(data.commandes.iter_mut().find(|c| c.id == id).map(|commande| {
            commande.status = status;
            commande.clone()
        }))
    }

    async fn list_commandes(&self) -> RepoResult<Vec<CommandeWithItems>> {
        let data = self.data.read();
        // Ids grow with insertion order, so newest first is descending id
        Ok(data
            .commandes
            .iter()
            .rev()
            .map(|c| data.with_items(c))
            .collect())
    }

    async fn find_latest_commande(
        &self,
        client_name: &str,
        table_number: i32,
    ) -> RepoResult<Option<CommandeWithItems>> {
        let data = self.data.read();
        Ok(data
            .commandes
            .iter()
            .rev()
            .find(|c| c.client_name == client_name && c.table_number == Some(table_number))
            .map(|c| data.with_items(c)))
    }
}

#[async_trait]
impl SupplementRepository for MemoryRepository {
    async fn list_supplements(&self) -> RepoResult<Vec<Supplement>> {
        let mut rows = self.data.read().supplements.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn create_supplement(&self, payload: SupplementPayload) -> RepoResult<Supplement> {
        let mut data = self.data.write();
        let row = Supplement {
            id: data.next_id(),
            name: payload.name,
            price: payload.price,
        };
        data.supplements.push(row.clone());
        Ok(row)
    }

    async fn update_supplement(
        &self,
        id: i64,
        payload: SupplementPayload,
    ) -> RepoResult<Option<Supplement>> {
        let mut data = self.data.write();
        Ok(data.supplements.iter_mut().find(|s| s.id == id).map(|row| {
            row.name = payload.name;
            row.price = payload.price;
            row.clone()
        }))
    }

    async fn delete_supplement(&self, id: i64) -> RepoResult<bool> {
        let mut data = self.data.write();
        let before = data.supplements.len();
        data.supplements.retain(|s| s.id != id);
        Ok(data.supplements.len() < before)
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::NewCommandeItem;

    fn new_item(name: &str, category: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            category: category.to_string(),
            price: Decimal::new(1000, 2),
            description: String::new(),
            image_path: "placeholder.jpg".to_string(),
            supplements: vec![],
        }
    }

    #[tokio::test]
    async fn test_daily_special_moves_between_items() {
        let repo = MemoryRepository::new();
        let a = repo.create_menu_item(new_item("Tajine", "Plats")).await.unwrap();
        let b = repo.create_menu_item(new_item("Couscous", "Plats")).await.unwrap();

        assert!(repo.set_daily_special(a.id, Some(Decimal::new(800, 2))).await.unwrap());
        assert!(repo.set_daily_special(b.id, None).await.unwrap());

        let flagged: Vec<_> = repo
            .list_menu_items()
            .await
            .unwrap()
            .into_iter()
            .filter(|m| m.is_daily_special)
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id, b.id);

        let old = repo
            .list_menu_items()
            .await
            .unwrap()
            .into_iter()
            .find(|m| m.id == a.id)
            .unwrap();
        assert_eq!(old.discount_price, None);
    }

    #[tokio::test]
    async fn test_unknown_daily_special_keeps_previous() {
        let repo = MemoryRepository::new();
        let a = repo.create_menu_item(new_item("Tajine", "Plats")).await.unwrap();
        repo.set_daily_special(a.id, None).await.unwrap();

        assert!(!repo.set_daily_special(9999, None).await.unwrap());
        let special = repo.find_daily_special().await.unwrap().unwrap();
        assert_eq!(special.id, a.id);
    }

    #[tokio::test]
    async fn test_menu_sorted_by_category() {
        let repo = MemoryRepository::new();
        repo.create_menu_item(new_item("Thé", "Boissons")).await.unwrap();
        repo.create_menu_item(new_item("Salade", "Entrées")).await.unwrap();
        repo.create_menu_item(new_item("Café", "Boissons")).await.unwrap();

        let names: Vec<_> = repo
            .list_menu_items()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["Thé", "Café", "Salade"]);
    }

    #[tokio::test]
    async fn test_duplicate_category_rejected() {
        let repo = MemoryRepository::new();
        let drinks = repo.create_category("Drinks").await.unwrap();
        let food = repo.create_category("Food").await.unwrap();

        assert!(matches!(
            repo.create_category("Drinks").await,
            Err(RepoError::Duplicate(_))
        ));
        assert!(matches!(
            repo.update_category(food.id, "Drinks").await,
            Err(RepoError::Duplicate(_))
        ));
        // Renaming a category to its own name is fine
        assert!(repo.update_category(drinks.id, "Drinks").await.unwrap());
        assert!(!repo.category_name_taken("Drinks", Some(drinks.id)).await.unwrap());
        assert!(repo.category_name_taken("Drinks", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_failing_table_writes() {
        let repo = MemoryRepository::new();
        repo.seed_table(2);
        repo.fail_table_writes(true);

        let err = repo.occupy_table(2, "1 plat(s) pour Ana", Utc::now()).await;
        assert!(matches!(err, Err(RepoError::Database(_))));

        repo.fail_table_writes(false);
        assert!(repo.occupy_table(2, "1 plat(s) pour Ana", Utc::now()).await.unwrap());
        assert!(!repo.occupy_table(3, "x", Utc::now()).await.unwrap());
    }

    #[tokio::test]
    async fn test_latest_commande_lookup() {
        let repo = MemoryRepository::new();
        let placement = |total: i64| OrderPlacement {
            client_name: "Ana".to_string(),
            total_price: Decimal::from(total),
            table_number: Some(4),
            notes: None,
            client_id: None,
            items: vec![NewCommandeItem {
                food_name: "Pizza".to_string(),
                price: Decimal::from(total),
                quantity: 1,
                image_path: None,
                supplements: vec![],
            }],
        };

        repo.place_order(placement(10)).await.unwrap();
        let second = repo.place_order(placement(20)).await.unwrap();

        let found = repo.find_latest_commande("Ana", 4).await.unwrap().unwrap();
        assert_eq!(found.commande.id, second.commande_id);
        assert_eq!(found.items.len(), 1);
        assert!(repo.find_latest_commande("Ana", 5).await.unwrap().is_none());
        assert!(repo.find_latest_commande("Bob", 4).await.unwrap().is_none());
    }
}
