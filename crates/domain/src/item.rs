//! Item: a single inventory record, plus the create candidate and patch
//! shapes accepted from clients.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InventoryError, ValidationError};
use crate::id::ItemId;

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
}

impl Item {
    /// Materialise a validated candidate under the given id.
    #[must_use]
    pub fn from_new(id: ItemId, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            quantity: new.quantity,
            price: new.price,
        }
    }

    /// Overwrite every field the patch carries a meaningful value for.
    ///
    /// Strings count only when non-blank; numbers count only when `>= 0`.
    /// Anything else leaves the stored field untouched, so a negative
    /// quantity or price in a patch is ignored rather than rejected.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name.filter(|s| !s.trim().is_empty()) {
            self.name = name;
        }
        if let Some(description) = patch.description.filter(|s| !s.trim().is_empty()) {
            self.description = description;
        }
        if let Some(quantity) = patch.quantity.filter(|q| *q >= 0) {
            self.quantity = quantity;
        }
        if let Some(price) = patch.price.filter(|p| *p >= 0.0) {
            self.price = price;
        }
    }
}

/// Client-supplied fields for a new item.
///
/// Missing or `null` JSON fields fall back to zero values; an `id` in the
/// payload is ignored since the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewItem {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewItem {
    /// Create a builder for constructing a [`NewItem`].
    #[must_use]
    pub fn builder() -> NewItemBuilder {
        NewItemBuilder::default()
    }

    /// Check field invariants: name, then quantity, then price.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] for the first failing field.
    pub fn validate(&self) -> Result<(), InventoryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.quantity < 0 {
            return Err(ValidationError::NegativeQuantity.into());
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewItem`].
#[derive(Debug, Default)]
pub struct NewItemBuilder {
    name: Option<String>,
    description: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
}

impl NewItemBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Consume the builder, validate, and return a [`NewItem`].
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] if any field is invalid.
    pub fn build(self) -> Result<NewItem, InventoryError> {
        let item = NewItem {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        };
        item.validate()?;
        Ok(item)
    }
}

/// Partial update. `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}
