//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;
pub mod pages;

use axum::Router;
use axum::routing::{delete, get, post, put};

use shelf_app::ports::ItemRepository;

use crate::state::AppState;

/// Build the item and page routes.
pub fn routes<IR>() -> Router<AppState<IR>>
where
    IR: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        // Items
        .route("/get-item/{item_id}", get(items::get::<IR>))
        .route("/get-by-name", get(items::get_by_name::<IR>))
        .route("/create-item", post(items::create::<IR>))
        .route("/update-item/{item_id}", put(items::update::<IR>))
        .route("/delete-item", delete(items::delete::<IR>))
}
