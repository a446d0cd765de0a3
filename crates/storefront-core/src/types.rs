//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────┐   ┌─────────────────┐   ┌─────────────────┐     │
//! │  │ ProductAttributes │──►│    Product      │──►│    LineItem     │     │
//! │  │  ───────────────  │   │  ─────────────  │   │  ─────────────  │     │
//! │  │  product_id (str) │   │  id             │   │  id             │     │
//! │  │  name (str)       │   │  name           │   │  name           │     │
//! │  │  price (str)      │   │  price (Price)  │   │  unit_price     │     │
//! │  └───────────────────┘   └─────────────────┘   │  quantity (≥1)  │     │
//! │                                                └─────────────────┘     │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     ViewId      │   │  TransactionId  │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  home-page      │   │  "T-<millis>"   │                             │
//! │  │  cart-page      │   └─────────────────┘                             │
//! │  │  thankyou-page  │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Price;
use crate::validation::{parse_price, validate_name, validate_price, validate_product_id};

// =============================================================================
// Product
// =============================================================================

/// The raw attributes a product card attaches to its "add" control.
///
/// Everything is text, exactly as it sits on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub product_id: String,
    pub name: String,
    pub price: String,
}

impl ProductAttributes {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        ProductAttributes {
            product_id: product_id.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// A product that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier; line items are unique by this.
    pub id: String,

    /// Display name shown in the cart and sent as `item_name`.
    pub name: String,

    /// Unit price; `Invalid` when the card's price did not parse.
    pub price: Price,
}

impl Product {
    /// Creates a product from already-checked values.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    /// Takes a card's attributes as they are, the way a click does.
    ///
    /// Nothing is rejected: an empty id or name is kept verbatim and an
    /// unparsable price becomes [`Price::Invalid`]. Use `try_from` where
    /// bad attributes must be refused (the configured catalog).
    pub fn from_attributes(attrs: &ProductAttributes) -> Self {
        Product {
            id: attrs.product_id.clone(),
            name: attrs.name.clone(),
            price: parse_price(&attrs.price),
        }
    }
}

impl TryFrom<&ProductAttributes> for Product {
    type Error = ValidationError;

    fn try_from(attrs: &ProductAttributes) -> Result<Self, Self::Error> {
        Ok(Product {
            id: validate_product_id(&attrs.product_id)?,
            name: validate_name(&attrs.name)?,
            price: validate_price(&attrs.price)?.into(),
        })
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart with an aggregated quantity.
///
/// ## Invariants
/// - `quantity >= 1` (a line is created with 1 and only ever incremented)
/// - Name and price are frozen from the first add of this id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl LineItem {
    /// Creates a fresh line holding a single unit of the product.
    pub fn first_unit(product: &Product) -> Self {
        LineItem {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Price {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// View Id
// =============================================================================

/// The fixed set of views the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    #[serde(rename = "home-page")]
    Home,
    #[serde(rename = "cart-page")]
    Cart,
    #[serde(rename = "thankyou-page")]
    ThankYou,
}

impl ViewId {
    /// Every view, in page order.
    pub const ALL: [ViewId; 3] = [ViewId::Home, ViewId::Cart, ViewId::ThankYou];

    /// The element id of the view container.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home-page",
            ViewId::Cart => "cart-page",
            ViewId::ThankYou => "thankyou-page",
        }
    }

    /// Looks up a view by element id. Unknown ids yield `None`.
    pub fn parse(id: &str) -> Option<Self> {
        ViewId::ALL.into_iter().find(|v| v.as_str() == id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Transaction Id
// =============================================================================

/// Identifier shown on the confirmation page and sent with `purchase`.
///
/// Time-derived, so unique enough for display but not globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Builds `T-<millis>` from a unix timestamp in milliseconds.
    pub fn from_unix_millis(millis: i64) -> Self {
        TransactionId(format!("T-{}", millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
