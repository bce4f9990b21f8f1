//! Shared application state for axum handlers.

use std::sync::Arc;

use shelf_app::ports::ItemRepository;
use shelf_app::services::item_service::ItemService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<IR> {
    /// Item CRUD service.
    pub item_service: Arc<ItemService<IR>>,
}

impl<IR> Clone for AppState<IR> {
    fn clone(&self) -> Self {
        Self {
            item_service: Arc::clone(&self.item_service),
        }
    }
}

impl<IR> AppState<IR>
where
    IR: ItemRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(item_service: ItemService<IR>) -> Self {
        Self {
            item_service: Arc::new(item_service),
        }
    }
}
