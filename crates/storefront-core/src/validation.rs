//! # Validation Module
//!
//! Turns the raw attributes carried by a product card's "add" control into
//! checked values.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product card                                                           │
//! │  data-product-id="shield-001"  data-name="..."  data-price="49.99"     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ProductAttributes (strings)                                            │
//! │           │                                                             │
//! │           ▼  THIS MODULE                                                │
//! │  validate_product_id / validate_name / validate_price                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Product { id, name, price: Money } ──► Cart::add                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_price;
//!
//! assert_eq!(validate_price("49.99").unwrap().cents(), 4999);
//! assert!(validate_price("free").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, Price};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product id.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 64 characters
pub fn validate_product_id(id: &str) -> ValidationResult<String> {
    required_trimmed("product_id", id, MAX_PRODUCT_ID_LEN)
}

/// Validates a product display name and returns it trimmed.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    required_trimmed("name", name, MAX_PRODUCT_NAME_LEN)
}

fn required_trimmed(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Price Validator
// =============================================================================

/// Parses a decimal price string into Money.
///
/// ## Rules
/// - Digits with an optional `.` and at most two fraction digits
/// - `"10"`, `"10.5"`, `"10.50"` and `".5"` are accepted
/// - Negative values, signs, exponents and thousands separators are rejected
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price;
///
/// assert_eq!(validate_price("10").unwrap().cents(), 1000);
/// assert_eq!(validate_price("10.5").unwrap().cents(), 1050);
/// assert!(validate_price("-1.00").is_err());
/// assert!(validate_price("1.999").is_err());
/// ```
pub fn validate_price(raw: &str) -> ValidationResult<Money> {
    let raw = raw.trim();
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    };

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    if raw.starts_with('-') {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("no digits"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected a decimal number like 49.99"));
    }
    if fraction.len() > 2 {
        return Err(invalid("at most two decimal places"));
    }

    let whole_cents = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<i64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .ok_or_else(|| invalid("amount too large"))?
    };

    let fraction_cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
        _ => fraction.parse::<i64>().map_err(|_| invalid("bad fraction"))?,
    };

    whole_cents
        .checked_add(fraction_cents)
        .map(Money::from_cents)
        .ok_or_else(|| invalid("amount too large"))
}

/// Lenient counterpart of [`validate_price`]: anything it rejects becomes
/// [`Price::Invalid`] instead of an error.
pub fn parse_price(raw: &str) -> Price {
    validate_price(raw).ok().into()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id("  shield-001 ").unwrap(), "shield-001");
        assert!(matches!(
            validate_product_id("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_id(&"x".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Mjolnir Replica").unwrap(), "Mjolnir Replica");
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_validate_price_accepts_common_shapes() {
        assert_eq!(validate_price("49.99").unwrap().cents(), 4999);
        assert_eq!(validate_price("10").unwrap().cents(), 1000);
        assert_eq!(validate_price("10.5").unwrap().cents(), 1050);
        assert_eq!(validate_price("0").unwrap().cents(), 0);
        assert_eq!(validate_price(".5").unwrap().cents(), 50);
        assert_eq!(validate_price("7.").unwrap().cents(), 700);
    }

    #[test]
    fn test_validate_price_rejects_garbage() {
        assert!(matches!(
            validate_price(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_price("-3"),
            Err(ValidationError::Negative { .. })
        ));
        for raw in ["abc", "1e3", "1,000.00", "+5", "1.999", ".", "NaN"] {
            assert!(
                matches!(validate_price(raw), Err(ValidationError::InvalidFormat { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_price_overflow() {
        assert!(validate_price("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_price_never_fails() {
        assert_eq!(parse_price("49.99").cents(), Some(4999));
        assert_eq!(parse_price("abc"), Price::Invalid);
        assert_eq!(parse_price(""), Price::Invalid);
        assert_eq!(parse_price("-1"), Price::Invalid);
    }

    #[test]
    fn test_largest_accepted_price_is_safe_in_cart_math() {
        let max = validate_price("92233720368547758.07").unwrap();
        assert_eq!(max.cents(), i64::MAX);
        assert!(validate_price("92233720368547758.08").is_err());

        let line = max.multiply_quantity(u32::MAX);
        let total: Money = [line, max, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!(total.to_decimal_string(), "92233720368547758.07");
    }
}
