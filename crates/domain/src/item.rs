//! Item — a priced product record held in the store, and its partial update.

use serde::{Deserialize, Serialize};

use crate::error::{ShelfError, ValidationError};

/// A product with a display name, a unit price, and an optional brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

impl Item {
    /// Create a builder for constructing an [`Item`].
    #[must_use]
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] when `name` is empty or `price`
    /// is `NaN` or infinite.
    pub fn validate(&self) -> Result<(), ShelfError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinitePrice(self.price).into());
        }
        Ok(())
    }

    /// Overwrite every field that is set in `patch`, leaving the others as they are.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(brand) = patch.brand {
            self.brand = Some(brand);
        }
    }
}

/// Step-by-step builder for [`Item`].
#[derive(Debug, Default)]
pub struct ItemBuilder {
    name: Option<String>,
    price: Option<f64>,
    brand: Option<String>,
}

impl ItemBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Consume the builder, validate, and return an [`Item`].
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if `name` is missing or empty, or
    /// if `price` is missing or not finite.
    pub fn build(self) -> Result<Item, ShelfError> {
        let price = self.price.ok_or(ValidationError::MissingPrice)?;
        let item = Item {
            name: self.name.unwrap_or_default(),
            price,
            brand: self.brand,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Partial update for an [`Item`].
///
/// `None` means "leave unchanged". A brand can be replaced but not cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
}

impl ItemPatch {
    /// Whether applying this patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.brand.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> Item {
        Item::builder()
            .name("Bread")
            .price(3.0)
            .brand("Acme")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_item_when_name_and_price_provided() {
        let item = Item::builder().name("Milk").price(2.5).build().unwrap();
        assert_eq!(item.name, "Milk");
        assert!((item.price - 2.5).abs() < f64::EPSILON);
        assert!(item.brand.is_none());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Item::builder().price(1.0).build();
        assert!(matches!(
            result,
            Err(ShelfError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_is_missing() {
        let result = Item::builder().name("Milk").build();
        assert!(matches!(
            result,
            Err(ShelfError::Validation(ValidationError::MissingPrice))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_is_not_finite() {
        let result = Item::builder().name("Milk").price(f64::NAN).build();
        assert!(matches!(
            result,
            Err(ShelfError::Validation(ValidationError::NonFinitePrice(_)))
        ));

        let result = Item::builder().name("Milk").price(f64::INFINITY).build();
        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_missing_brand_as_null() {
        let item = Item::builder().name("Milk").price(2.5).build().unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Milk", "price": 2.5, "brand": null})
        );
    }

    #[test]
    fn should_only_overwrite_present_fields_when_patching() {
        let mut item = bread();
        item.apply(ItemPatch {
            price: Some(3.5),
            ..ItemPatch::default()
        });

        assert_eq!(item.name, "Bread");
        assert!((item.price - 3.5).abs() < f64::EPSILON);
        assert_eq!(item.brand.as_deref(), Some("Acme"));
    }

    #[test]
    fn should_leave_item_unchanged_when_patch_is_empty() {
        let mut item = bread();
        let patch = ItemPatch::default();
        assert!(patch.is_empty());

        item.apply(patch);
        assert_eq!(item, bread());
    }

    #[test]
    fn should_reach_same_state_when_patch_applied_twice() {
        let patch = ItemPatch {
            name: Some("Rye".to_string()),
            price: None,
            brand: Some("Baker & Co".to_string()),
        };

        let mut once = bread();
        once.apply(patch.clone());

        let mut twice = bread();
        twice.apply(patch.clone());
        twice.apply(patch);

        assert_eq!(once, twice);
    }
}
