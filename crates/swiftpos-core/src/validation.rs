//! # Validation Module
//!
//! Form input validation for SwiftPOS.
//!
//! ## Validation Strategy
//! Validation failures are handled locally by the screens: the triggering
//! action is disabled or an inline message is shown. Nothing here throws
//! past the event handler that ran it.
//!
//! ## Usage
//! ```rust
//! use swiftpos_core::validation::{validate_product_name, validate_min_wholesale_qty};
//!
//! assert!(validate_product_name("Cookie").is_ok());
//! assert!(validate_min_wholesale_qty(3).is_ok());
//! assert!(validate_min_wholesale_qty(0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    required("name", name)?;

    if name.trim().len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a variant type (the dimension, e.g. "size").
pub fn validate_variant_type(variant_type: &str) -> ValidationResult<()> {
    required("variant type", variant_type)
}

/// Validates a variant value (e.g. "250gr").
pub fn validate_variant_value(value: &str) -> ValidationResult<()> {
    required("variant value", value)
}

/// Validates the per-product wholesale threshold.
///
/// ## Rules
/// - Must be at least 1: a threshold of zero would price every line
///   wholesale before anything is in the cart
pub fn validate_min_wholesale_qty(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::BelowMinimum {
            field: "minimum wholesale quantity".to_string(),
            min: 1,
        });
    }
    Ok(())
}

/// Validates a price in cents.
///
/// Zero is allowed (free items); negative prices are not.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a stock count. Stock is never negative in the catalog.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// User Validators
// =============================================================================

/// Validates a login username.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
pub fn validate_username(username: &str) -> ValidationResult<()> {
    required("username", username)?;

    if username.trim().len() > 50 {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: 50,
        });
    }

    Ok(())
}

/// Validates a password. Plaintext, any non-empty string.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    required("password", password)
}

/// Validates a user's display name.
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    required("name", name)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Cookie").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_variant_fields() {
        assert!(validate_variant_type("size").is_ok());
        assert!(validate_variant_type(" ").is_err());
        assert!(validate_variant_value("250gr").is_ok());
        assert!(validate_variant_value("").is_err());
    }

    #[test]
    fn test_validate_min_wholesale_qty() {
        assert!(validate_min_wholesale_qty(1).is_ok());
        assert!(validate_min_wholesale_qty(100).is_ok());
        assert!(validate_min_wholesale_qty(0).is_err());
        assert!(validate_min_wholesale_qty(-3).is_err());
    }

    #[test]
    fn test_validate_price_and_stock() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-1).is_err());

        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(10).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_user_fields() {
        assert!(validate_username("owner").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username(&"a".repeat(60)).is_err());

        assert!(validate_password("owner123").is_ok());
        assert!(validate_password("").is_err());

        assert!(validate_display_name("System Owner").is_ok());
        assert!(validate_display_name(" ").is_err());
    }
}
