//! Item service — use-cases for managing the item store.

use shelf_domain::error::{NotFoundError, ShelfError, ValidationError};
use shelf_domain::id::ItemId;
use shelf_domain::item::{Item, ItemPatch};

use crate::ports::ItemRepository;

/// Application service for item CRUD operations.
pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> Result<Item, ShelfError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::ItemId(id).into())
    }

    /// Find the first item, in insertion order, named exactly `name`.
    ///
    /// A missing name never matches anything.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when nothing matches, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_item_by_name(&self, name: Option<&str>) -> Result<Item, ShelfError> {
        let found = match name {
            Some(name) => self.repo.find_by_name(name).await?,
            None => None,
        };
        found.ok_or_else(|| NotFoundError::ItemName(name.map(str::to_owned)).into())
    }

    /// List all items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_items(&self) -> Result<Vec<Item>, ShelfError> {
        self.repo.get_all().await
    }

    /// Store a new item under a caller-chosen id after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if invariants fail,
    /// [`ShelfError::Conflict`] if `id` is taken, or a storage error from
    /// the repository.
    #[tracing::instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn create_item(&self, id: ItemId, item: Item) -> Result<Item, ShelfError> {
        item.validate()?;
        let created = self.repo.create(id, item).await?;
        tracing::debug!(%id, "item created");
        Ok(created)
    }

    /// Apply a partial update to an existing item.
    ///
    /// The patched item is validated before it is written back, so a patch
    /// that would break an invariant leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no item with `id` exists,
    /// [`ShelfError::Validation`] if the patched item is invalid, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, ShelfError> {
        let mut item = self.get_item(id).await?;
        if patch.is_empty() {
            return Ok(item);
        }
        item.apply(patch);
        item.validate()?;
        self.repo.update(id, item).await
    }

    /// Delete an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] when `id` is not strictly positive
    /// (checked before any lookup), [`ShelfError::NotFound`] when no item
    /// with `id` exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<(), ShelfError> {
        if !id.is_positive() {
            return Err(ValidationError::NonPositiveItemId(id).into());
        }
        self.repo.delete(id).await?;
        tracing::debug!(%id, "item deleted");
        Ok(())
    }
}
