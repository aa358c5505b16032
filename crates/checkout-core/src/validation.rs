//! # Validation Module
//!
//! Input validation for list and item edits.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Edit sheets (UI)                                             │
//! │  ├── Save button disabled while the name is blank                      │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names present and bounded                                         │
//! │  └── Prices / quantities never negative                                │
//! │                                                                         │
//! │  The formatter itself accepts ANY decimal, negative included;          │
//! │  rejecting negatives is a caller-side concern handled here.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_item_name, validate_price};
//! use rust_decimal::Decimal;
//!
//! validate_item_name("Apples").unwrap();
//! assert!(validate_price(Decimal::new(-1, 0)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::{MAX_CURRENCY_SYMBOL_LENGTH, MAX_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a shopping list name.
///
/// ## Rules
/// - Must not be blank after trimming
/// - At most 200 characters
pub fn validate_list_name(name: &str) -> ValidationResult<()> {
    validate_name("list name", name)
}

/// Validates an item name (same rules as list names).
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("item name", name)
}

/// Validates a currency symbol.
///
/// ## Rules
/// - Must not be blank (custom symbols are fine: "R$", "CHF", "🍍")
/// - At most 8 characters
pub fn validate_currency_symbol(symbol: &str) -> ValidationResult<()> {
    let symbol = symbol.trim();

    if symbol.is_empty() {
        return Err(ValidationError::Required {
            field: "currency symbol".to_string(),
        });
    }

    if symbol.chars().count() > MAX_CURRENCY_SYMBOL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "currency symbol".to_string(),
            max: MAX_CURRENCY_SYMBOL_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_non_negative(field: &str, value: Decimal) -> ValidationResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (unknown price / free item).
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    validate_non_negative("price", price)
}

/// Validates an item total typed directly by the user.
pub fn validate_total(total: Decimal) -> ValidationResult<()> {
    validate_non_negative("total", total)
}

/// Validates a quantity. Zero is allowed (placeholder rows).
pub fn validate_quantity(quantity: Decimal) -> ValidationResult<()> {
    validate_non_negative("quantity", quantity)
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string coming back from the UI layer.
pub fn validate_uuid(id: &str) -> ValidationResult<uuid::Uuid> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id.trim()).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_names() {
        assert!(validate_list_name("Weekly Groceries").is_ok());
        assert!(validate_item_name("Milk").is_ok());

        assert_eq!(
            validate_item_name("   "),
            Err(ValidationError::Required {
                field: "item name".to_string()
            })
        );
        assert!(validate_list_name(&"A".repeat(201)).is_err());
        assert!(validate_list_name(&"é".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_currency_symbol() {
        assert!(validate_currency_symbol("$").is_ok());
        assert!(validate_currency_symbol("MX$").is_ok());
        assert!(validate_currency_symbol("").is_err());
        assert!(validate_currency_symbol("DOLLARSSS").is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(599, 2)).is_ok());
        assert!(validate_price(Decimal::new(-1, 2)).is_err());
        assert!(validate_quantity(Decimal::new(5, 1)).is_ok());
        assert!(validate_quantity(Decimal::new(-5, 1)).is_err());
        assert!(validate_total(Decimal::new(-100, 0)).is_err());
        // Negative zero is still zero
        assert!(validate_price(-Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }
}
