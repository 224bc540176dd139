//! Inventory item validation rules.
//!
//! This module lives in `core` (zero internal deps) so the same rules can be
//! applied by the service layer and by any future CLI or import tooling.
//! Adding an item is stricter than editing one: a new item must arrive with
//! at least one unit in stock, while an edit may bring the quantity to zero.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity label used in error messages.
pub const ENTITY_INVENTORY_ITEM: &str = "InventoryItem";

/// Minimum quantity accepted when adding a new item.
pub const MIN_ADD_QUANTITY: i64 = 1;

/// Minimum quantity accepted when editing an existing item.
pub const MIN_EDIT_QUANTITY: i64 = 0;

/// Low-stock threshold used when the caller does not supply one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Validate an item name: must contain a non-whitespace character.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::validation("Item name must not be empty"));
    }
    Ok(())
}

/// Validate a SKU: must contain a non-whitespace character.
pub fn validate_sku(sku: &str) -> Result<(), CoreError> {
    if sku.trim().is_empty() {
        return Err(CoreError::validation("SKU must not be empty"));
    }
    Ok(())
}

/// Validate a quantity against a lower bound.
///
/// Use [`MIN_ADD_QUANTITY`] for new items and [`MIN_EDIT_QUANTITY`] for edits.
pub fn validate_quantity(quantity: i64, min: i64) -> Result<(), CoreError> {
    if quantity < min {
        return Err(CoreError::Validation(format!(
            "Quantity must be at least {min}, got {quantity}"
        )));
    }
    Ok(())
}

/// Validate a unit price: finite and strictly positive.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Price must be greater than 0, got {price}"
        )));
    }
    Ok(())
}

/// Validate a low-stock threshold (non-negative).
pub fn validate_threshold(threshold: i64) -> Result<(), CoreError> {
    if threshold < 0 {
        return Err(CoreError::Validation(format!(
            "Threshold must not be negative, got {threshold}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Record-level validators
// ---------------------------------------------------------------------------

/// Validate every field of a new item.
pub fn validate_new_item(
    name: &str,
    sku: &str,
    quantity: i64,
    price: f64,
) -> Result<(), CoreError> {
    validate_name(name)?;
    validate_sku(sku)?;
    validate_quantity(quantity, MIN_ADD_QUANTITY)?;
    validate_price(price)
}

/// Validate the fields present in a partial update.
///
/// Absent fields are not checked. An update with nothing to change is rejected.
pub fn validate_item_changes(
    name: Option<&str>,
    quantity: Option<i64>,
    price: Option<f64>,
    has_other_changes: bool,
) -> Result<(), CoreError> {
    if name.is_none() && quantity.is_none() && price.is_none() && !has_other_changes {
        return Err(CoreError::validation("Update must change at least one field"));
    }
    if let Some(name) = name {
        validate_name(name)?;
    }
    if let Some(quantity) = quantity {
        validate_quantity(quantity, MIN_EDIT_QUANTITY)?;
    }
    if let Some(price) = price {
        validate_price(price)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- validate_new_item ---------------------------------------------------

    #[test]
    fn new_item_accepts_valid_fields() {
        assert!(validate_new_item("Widget", "W1", 10, 2.50).is_ok());
    }

    #[test]
    fn new_item_rejects_blank_name() {
        assert_matches!(
            validate_new_item("   ", "W1", 10, 2.50),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn new_item_rejects_empty_sku() {
        assert_matches!(
            validate_new_item("Widget", "", 10, 2.50),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn new_item_rejects_zero_quantity() {
        assert_matches!(
            validate_new_item("Widget", "W1", 0, 2.50),
            Err(CoreError::Validation(msg)) if msg.contains("at least 1")
        );
    }

    #[test]
    fn new_item_rejects_non_positive_price() {
        assert!(validate_new_item("Widget", "W1", 1, 0.0).is_err());
        assert!(validate_new_item("Widget", "W1", 1, -3.0).is_err());
        assert!(validate_new_item("Widget", "W1", 1, f64::NAN).is_err());
    }

    // -- validate_item_changes -----------------------------------------------

    #[test]
    fn changes_allow_zero_quantity() {
        assert!(validate_item_changes(None, Some(0), None, false).is_ok());
    }

    #[test]
    fn changes_reject_negative_quantity() {
        assert_matches!(
            validate_item_changes(None, Some(-1), None, false),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn changes_reject_empty_name_when_present() {
        assert!(validate_item_changes(Some(""), None, None, false).is_err());
    }

    #[test]
    fn changes_reject_empty_update() {
        assert!(validate_item_changes(None, None, None, false).is_err());
    }

    #[test]
    fn changes_accept_description_only() {
        assert!(validate_item_changes(None, None, None, true).is_ok());
    }

    // -- validate_threshold --------------------------------------------------

    #[test]
    fn threshold_zero_is_valid() {
        assert!(validate_threshold(0).is_ok());
    }

    #[test]
    fn threshold_negative_is_invalid() {
        assert!(validate_threshold(-1).is_err());
    }
}
