//! Storage-specific error type.

use shelf_domain::error::ShelfError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the inventory lock.
    #[error("inventory lock poisoned")]
    Poisoned,
}

impl From<StorageError> for ShelfError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
