//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InventoryError`] via `#[from]`.

use std::error::Error as StdError;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Invariant violations on item fields.
///
/// Variants are listed in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    EmptyName,
    #[error("quantity cannot be negative")]
    NegativeQuantity,
    #[error("price cannot be negative")]
    NegativePrice,
}

/// No record of kind `entity` exists with the given id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_validation_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name is required");
        assert_eq!(
            ValidationError::NegativeQuantity.to_string(),
            "quantity cannot be negative"
        );
        assert_eq!(
            ValidationError::NegativePrice.to_string(),
            "price cannot be negative"
        );
    }

    #[test]
    fn should_render_not_found_with_entity_name() {
        let err = NotFoundError {
            entity: "Item",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Item not found");
    }

    #[test]
    fn should_keep_message_when_converted_to_inventory_error() {
        let err: InventoryError = ValidationError::NegativePrice.into();
        assert_eq!(err.to_string(), "price cannot be negative");
        assert!(matches!(
            err,
            InventoryError::Validation(ValidationError::NegativePrice)
        ));
    }
}
