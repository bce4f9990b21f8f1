//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ShelfError`]
//! via `#[from]` (or a `From` impl for boxed storage failures).

use std::num::ParseIntError;

use crate::id::ItemId;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that violates an item invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Item price is required")]
    MissingPrice,

    #[error("Item price must be a finite number")]
    NonFinitePrice(f64),

    #[error("Item ID must be greater than 0")]
    NonPositiveItemId(ItemId),

    #[error("Item ID must be an integer")]
    InvalidItemId(#[source] ParseIntError),
}

/// Lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Item ID does not exist")]
    ItemId(ItemId),

    #[error("Item name not found")]
    ItemName(Option<String>),
}

/// Insert that collided with an existing key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Item ID already exists.")]
pub struct ConflictError {
    pub id: ItemId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_shelf_error() {
        let err: ShelfError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            ShelfError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_render_client_facing_messages() {
        assert_eq!(
            NotFoundError::ItemId(ItemId::new(3)).to_string(),
            "Item ID does not exist"
        );
        assert_eq!(
            NotFoundError::ItemName(Some("Eggs".to_string())).to_string(),
            "Item name not found"
        );
        assert_eq!(
            ConflictError { id: ItemId::new(1) }.to_string(),
            "Item ID already exists."
        );
        assert_eq!(
            ValidationError::NonPositiveItemId(ItemId::new(0)).to_string(),
            "Item ID must be greater than 0"
        );
    }

    #[test]
    fn should_keep_parse_error_as_source_of_invalid_item_id() {
        let parse = "abc".parse::<i64>().unwrap_err();
        let err = ValidationError::InvalidItemId(parse.clone());
        assert_eq!(err.to_string(), "Item ID must be an integer");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), parse.to_string());
    }

    #[test]
    fn should_keep_storage_source() {
        let io = std::io::Error::other("disk on fire");
        let err = ShelfError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }
}
