//! In-memory implementation of [`ItemRepository`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shelf_app::ports::ItemRepository;
use shelf_domain::error::{ConflictError, NotFoundError, ShelfError};
use shelf_domain::id::ItemId;
use shelf_domain::item::Item;

use crate::error::StorageError;

/// Items keyed by id, plus the order in which ids were first inserted.
#[derive(Debug, Default)]
struct Inventory {
    items: HashMap<ItemId, Item>,
    order: Vec<ItemId>,
}

impl Inventory {
    fn insert(&mut self, id: ItemId, item: Item) -> Result<Item, ShelfError> {
        match self.items.entry(id) {
            Entry::Occupied(_) => Err(ConflictError { id }.into()),
            Entry::Vacant(slot) => {
                slot.insert(item.clone());
                self.order.push(id);
                Ok(item)
            }
        }
    }

    fn replace(&mut self, id: ItemId, item: Item) -> Result<Item, ShelfError> {
        let slot = self
            .items
            .get_mut(&id)
            .ok_or(NotFoundError::ItemId(id))?;
        *slot = item.clone();
        Ok(item)
    }

    fn remove(&mut self, id: ItemId) -> Result<(), ShelfError> {
        self.items
            .remove(&id)
            .ok_or(NotFoundError::ItemId(id))?;
        self.order.retain(|key| *key != id);
        Ok(())
    }

    fn iter(&self) -> impl Iterator<Item = &Item> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }
}

/// Process-local item repository.
///
/// Readers share the lock, writers take it exclusively. No guard outlives a
/// single repository call.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    inventory: RwLock<Inventory>,
}

impl InMemoryItemRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inventory>, StorageError> {
        self.inventory.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inventory>, StorageError> {
        self.inventory.write().map_err(|_| StorageError::Poisoned)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn create(
        &self,
        id: ItemId,
        item: Item,
    ) -> impl Future<Output = Result<Item, ShelfError>> + Send {
        let result = self
            .write()
            .map_err(ShelfError::from)
            .and_then(|mut inventory| inventory.insert(id, item));
        async move { result }
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, ShelfError>> + Send {
        let result = self
            .read()
            .map(|inventory| inventory.items.get(&id).cloned())
            .map_err(ShelfError::from);
        async move { result }
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Item>, ShelfError>> + Send {
        let result = self
            .read()
            .map(|inventory| inventory.iter().find(|item| item.name == name).cloned())
            .map_err(ShelfError::from);
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, ShelfError>> + Send {
        let result = self
            .read()
            .map(|inventory| inventory.iter().cloned().collect())
            .map_err(ShelfError::from);
        async move { result }
    }

    fn update(
        &self,
        id: ItemId,
        item: Item,
    ) -> impl Future<Output = Result<Item, ShelfError>> + Send {
        let result = self
            .write()
            .map_err(ShelfError::from)
            .and_then(|mut inventory| inventory.replace(id, item));
        async move { result }
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), ShelfError>> + Send {
        let result = self
            .write()
            .map_err(ShelfError::from)
            .and_then(|mut inventory| inventory.remove(id));
        if result.is_err() {
            tracing::trace!(%id, "delete missed");
        }
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn item(name: &str, price: f64) -> Item {
        Item::builder().name(name).price(price).build().unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_item_when_valid() {
        let repo = InMemoryItemRepository::new();
        let id = ItemId::new(1);

        repo.create(id, item("Milk", 2.5)).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, item("Milk", 2.5));
    }

    #[tokio::test]
    async fn should_return_none_when_item_not_found() {
        let repo = InMemoryItemRepository::new();
        let result = repo.get_by_id(ItemId::new(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_return_conflict_without_overwriting_when_id_taken() {
        let repo = InMemoryItemRepository::new();
        let id = ItemId::new(1);
        repo.create(id, item("Milk", 2.5)).await.unwrap();

        let result = repo.create(id, item("Eggs", 4.0)).await;
        assert!(matches!(result, Err(ShelfError::Conflict(_))));

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Milk");
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_list_items_in_insertion_order() {
        let repo = InMemoryItemRepository::new();
        for (raw, name) in [(30, "c"), (10, "a"), (20, "b")] {
            repo.create(ItemId::new(raw), item(name, 1.0)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn should_find_first_inserted_match_by_name() {
        let repo = InMemoryItemRepository::new();
        repo.create(ItemId::new(5), item("Milk", 1.0)).await.unwrap();
        repo.create(ItemId::new(1), item("Milk", 2.0)).await.unwrap();

        let found = repo.find_by_name("Milk").await.unwrap().unwrap();
        assert!((found.price - 1.0).abs() < f64::EPSILON);

        assert!(repo.find_by_name("milk").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_keep_position_when_item_updated() {
        let repo = InMemoryItemRepository::new();
        repo.create(ItemId::new(1), item("Milk", 1.0)).await.unwrap();
        repo.create(ItemId::new(2), item("Milk", 2.0)).await.unwrap();

        repo.update(ItemId::new(1), item("Milk", 9.0)).await.unwrap();

        let found = repo.find_by_name("Milk").await.unwrap().unwrap();
        assert!((found.price - 9.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_item() {
        let repo = InMemoryItemRepository::new();
        let result = repo.update(ItemId::new(1), item("Milk", 1.0)).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_move_to_end_when_deleted_and_recreated() {
        let repo = InMemoryItemRepository::new();
        repo.create(ItemId::new(1), item("Milk", 1.0)).await.unwrap();
        repo.create(ItemId::new(2), item("Milk", 2.0)).await.unwrap();

        repo.delete(ItemId::new(1)).await.unwrap();
        assert!(repo.get_by_id(ItemId::new(1)).await.unwrap().is_none());

        repo.create(ItemId::new(1), item("Milk", 3.0)).await.unwrap();
        let found = repo.find_by_name("Milk").await.unwrap().unwrap();
        assert!((found.price - 2.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_item() {
        let repo = InMemoryItemRepository::new();
        let result = repo.delete(ItemId::new(1)).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_report_storage_error_when_lock_poisoned() {
        let repo = Arc::new(InMemoryItemRepository::new());
        let poisoner = Arc::clone(&repo);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inventory.write().unwrap();
            panic!("poison the inventory lock");
        })
        .join();

        let result = repo.get_by_id(ItemId::new(1)).await;
        assert!(matches!(result, Err(ShelfError::Storage(_))));
    }
}
