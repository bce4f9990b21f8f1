//! Storage port — repository trait for items.

use std::future::Future;

use shelf_domain::error::ShelfError;
use shelf_domain::id::ItemId;
use shelf_domain::item::Item;

/// Keyed storage for [`Item`]s.
///
/// Implementations must make each call atomic: an existence check and the
/// mutation it guards happen under the same critical section. Iteration
/// order for [`find_by_name`](Self::find_by_name) and
/// [`get_all`](Self::get_all) is insertion order.
pub trait ItemRepository {
    /// Insert a new item under `id`.
    ///
    /// Fails with [`ShelfError::Conflict`] when `id` is already taken, leaving
    /// the stored item untouched.
    fn create(
        &self,
        id: ItemId,
        item: Item,
    ) -> impl Future<Output = Result<Item, ShelfError>> + Send;

    /// Get an item by its identifier.
    fn get_by_id(&self, id: ItemId)
    -> impl Future<Output = Result<Option<Item>, ShelfError>> + Send;

    /// First item, in insertion order, whose name equals `name` exactly.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Item>, ShelfError>> + Send;

    /// Every stored item, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, ShelfError>> + Send;

    /// Replace the item stored under `id`, keeping its position.
    ///
    /// Fails with [`ShelfError::NotFound`] when `id` is absent.
    fn update(
        &self,
        id: ItemId,
        item: Item,
    ) -> impl Future<Output = Result<Item, ShelfError>> + Send;

    /// Remove the item stored under `id`.
    ///
    /// Fails with [`ShelfError::NotFound`] when `id` is absent.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), ShelfError>> + Send;
}
