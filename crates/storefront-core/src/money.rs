//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing prices as floats:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  A cart total rendered with two decimals hides it, but the purchase    │
//! │  value sent to the data layer must match what the cart page showed.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    4999 + 4999 = 9998 cents → "99.98" everywhere                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1000); // $10.00
//! let line_total = price.multiply_quantity(2);
//! let total = line_total + Money::from_cents(500);
//!
//! assert_eq!(total.to_decimal_string(), "25.00");
//! assert_eq!(total.to_string(), "$25.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// "49.99" on the product card ──► Product.price ──► LineItem.unit_price
///                                                        │
///                                  LineItem.line_total ◄─┘
///                                        │
///                   Cart.total ◄─────────┘──► "$99.98" on the cart page
///                        │
///                        └──► purchase.value = "99.98" in the data layer
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a line quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4999);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 9998);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the amount with exactly two decimals and no symbol.
    ///
    /// This is the shape of `value` in a purchase record.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2500).to_decimal_string(), "25.00");
    /// assert_eq!(Money::zero().to_decimal_string(), "0.00");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Formats the amount with a currency symbol, e.g. `"$25.00"`.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Returns the amount in major units as a float.
    ///
    /// Only for analytics payloads, where GA4 expects `price` to be a
    /// number. Never do arithmetic on the result.
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Price Type
// =============================================================================

/// A unit price or amount read off the page, which may not be a number.
///
/// A product card whose price attribute does not parse still goes into the
/// cart. Its price is `Invalid`, and anything computed from it is `Invalid`
/// too: line totals, the cart total, the purchase value.
///
/// ```text
/// Valid(a)  + Valid(b)  = Valid(a + b)
/// Valid(_)  + Invalid   = Invalid
/// Invalid   × qty       = Invalid
///
/// rendered:   "$25.00"  │  "$NaN"
/// record:     25.0      │  null     (item price)
///             "25.00"   │  "NaN"    (purchase value)
/// ```
///
/// Serializes as the cents number, or `null` when invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Money>", into = "Option<Money>")]
pub enum Price {
    Valid(Money),
    Invalid,
}

impl Price {
    /// Text shown wherever an invalid amount is rendered.
    pub const INVALID_TEXT: &'static str = "NaN";

    pub const fn zero() -> Self {
        Price::Valid(Money::zero())
    }

    /// The amount, if there is one.
    #[inline]
    pub const fn money(&self) -> Option<Money> {
        match self {
            Price::Valid(money) => Some(*money),
            Price::Invalid => None,
        }
    }

    #[inline]
    pub const fn cents(&self) -> Option<i64> {
        match self {
            Price::Valid(money) => Some(money.cents()),
            Price::Invalid => None,
        }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Price::Valid(_))
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Price::Valid(money) if money.is_zero())
    }

    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        match self {
            Price::Valid(money) => Price::Valid(money.multiply_quantity(qty)),
            Price::Invalid => Price::Invalid,
        }
    }

    /// `"25.00"`, or `"NaN"` when invalid.
    pub fn to_decimal_string(&self) -> String {
        match self {
            Price::Valid(money) => money.to_decimal_string(),
            Price::Invalid => Price::INVALID_TEXT.to_string(),
        }
    }

    /// `"$25.00"`, or `"$NaN"` when invalid.
    pub fn format_with(&self, symbol: &str) -> String {
        match self {
            Price::Valid(money) => money.format_with(symbol),
            Price::Invalid => format!("{}{}", symbol, Price::INVALID_TEXT),
        }
    }

    /// Major units for analytics payloads; `None` becomes JSON `null`.
    pub fn to_major_units(&self) -> Option<f64> {
        self.money().map(|money| money.to_major_units())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl From<Money> for Price {
    fn from(money: Money) -> Self {
        Price::Valid(money)
    }
}

impl From<Option<Money>> for Price {
    fn from(money: Option<Money>) -> Self {
        money.map_or(Price::Invalid, Price::Valid)
    }
}

impl From<Price> for Option<Money> {
    fn from(price: Price) -> Self {
        price.money()
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Price::Valid(a), Price::Valid(b)) => Price::Valid(a + b),
            _ => Price::Invalid,
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_format_with_other_symbol() {
        assert_eq!(Money::from_cents(1234).format_with("€"), "€12.34");
        assert_eq!(Money::from_cents(5).format_with(""), "0.05");
    }

    #[test]
    fn test_decimal_string_always_two_places() {
        assert_eq!(Money::from_cents(2500).to_decimal_string(), "25.00");
        assert_eq!(Money::from_cents(7).to_decimal_string(), "0.07");
        assert_eq!(Money::from_cents(12990).to_decimal_string(), "129.90");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let lines = [Money::from_cents(1000) * 2, Money::from_cents(500) * 1];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total.cents(), 2500);

        let mut running = Money::zero();
        running += Money::from_cents(250);
        assert_eq!(running.cents(), 250);
    }

    #[test]
    fn test_major_units_for_analytics() {
        assert!((Money::from_cents(4999).to_major_units() - 49.99).abs() < 1e-9);
        assert_eq!(Money::zero().to_major_units(), 0.0);
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(huge.multiply_quantity(u32::MAX).cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);

        let mut running = huge;
        running += huge;
        assert_eq!(running.cents(), i64::MAX);

        let total: Money = [huge, huge, huge].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_invalid_price_poisons_totals() {
        let ten = Price::from(Money::from_cents(1000));
        assert_eq!((ten.multiply_quantity(2) + ten).cents(), Some(3000));

        let total: Price = [ten, Price::Invalid, ten].into_iter().sum();
        assert_eq!(total, Price::Invalid);
        assert_eq!(Price::Invalid.multiply_quantity(3), Price::Invalid);
    }

    #[test]
    fn test_invalid_price_rendering() {
        assert_eq!(Price::Invalid.format_with("$"), "$NaN");
        assert_eq!(Price::Invalid.to_decimal_string(), "NaN");
        assert_eq!(Price::Invalid.to_major_units(), None);
        assert_eq!(Price::from(Money::from_cents(2500)).to_string(), "$25.00");
        assert!(Price::default().is_zero());
    }

    #[test]
    fn test_price_serializes_as_number_or_null() {
        let valid = Price::from(Money::from_cents(4999));
        assert_eq!(serde_json::to_value(valid).unwrap(), serde_json::json!(4999));
        assert_eq!(
            serde_json::to_value(Price::Invalid).unwrap(),
            serde_json::Value::Null
        );
        let back: Price = serde_json::from_str("null").unwrap();
        assert_eq!(back, Price::Invalid);
    }
}
