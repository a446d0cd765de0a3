//! # Analytics Events
//!
//! Record shapes for the GA4/GTM data layer.
//!
//! This module only BUILDS events. Pushing them somewhere is the app's job
//! (see `AnalyticsEmitter` in the storefront crate), which keeps this crate
//! free of I/O.
//!
//! ## Record Shapes
//! ```text
//! virtual_page_view   { event, page_path: "/cart-page", page_title }
//!
//! add_to_cart         { event, ecommerce: { currency,
//!                                           items: [{ item_id, item_name,
//!                                                     price, quantity: 1 }] } }
//!
//! purchase            { event, ecommerce: { transaction_id, value: "25.00",
//!                                           currency, items: [...] } }
//! ```
//!
//! An invalid price shows up as `price: null` and `value: "NaN"`.
//!
//! ## Usage
//! ```rust
//! use storefront_core::analytics::AnalyticsEvent;
//!
//! let event = AnalyticsEvent::page_view("cart-page", "Store - Cart").unwrap();
//! let record = event.to_record();
//! assert_eq!(record["event"], "virtual_page_view");
//! assert_eq!(record["page_path"], "/cart-page");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Price;
use crate::types::{LineItem, Product, TransactionId};

/// Event name for single-page navigation.
pub const PAGE_VIEW_EVENT: &str = "virtual_page_view";

/// Event name for a single unit added to the cart.
pub const ADD_TO_CART_EVENT: &str = "add_to_cart";

/// Event name for a completed checkout.
pub const PURCHASE_EVENT: &str = "purchase";

// =============================================================================
// Payload Types
// =============================================================================

/// One entry in a GA4 `items` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EcommerceItem {
    pub item_id: String,
    pub item_name: String,
    /// Unit price in major units. GA4 wants a number here; a price that
    /// never parsed goes out as `null`.
    pub price: Option<f64>,
    pub quantity: u32,
}

impl EcommerceItem {
    /// The single unit that an "add" click puts in the cart.
    pub fn single_unit(product: &Product) -> Self {
        EcommerceItem {
            item_id: product.id.clone(),
            item_name: product.name.clone(),
            price: product.price.to_major_units(),
            quantity: 1,
        }
    }
}

impl From<&LineItem> for EcommerceItem {
    fn from(line: &LineItem) -> Self {
        EcommerceItem {
            item_id: line.id.clone(),
            item_name: line.name.clone(),
            price: line.unit_price.to_major_units(),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageViewPayload {
    pub page_path: String,
    pub page_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddToCartPayload {
    pub ecommerce: AddToCartEcommerce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddToCartEcommerce {
    pub currency: String,
    pub items: Vec<EcommerceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchasePayload {
    pub ecommerce: PurchaseEcommerce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseEcommerce {
    pub transaction_id: String,
    /// Revenue with exactly two decimals, as a string.
    pub value: String,
    pub currency: String,
    pub items: Vec<EcommerceItem>,
}

// =============================================================================
// Analytics Event
// =============================================================================

/// A named event with an arbitrary JSON object payload.
///
/// Events are transient: built, pushed, and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    name: String,
    payload: Map<String, Value>,
}

impl AnalyticsEvent {
    /// Creates an event from a ready-made payload object.
    pub fn new(name: impl Into<String>, payload: Map<String, Value>) -> Self {
        AnalyticsEvent {
            name: name.into(),
            payload,
        }
    }

    /// Creates an event from any payload that serializes to a JSON object.
    pub fn from_payload<T: Serialize>(name: &str, payload: &T) -> CoreResult<Self> {
        let value = serde_json::to_value(payload).map_err(|source| CoreError::PayloadEncoding {
            event: name.to_string(),
            source,
        })?;

        match value {
            Value::Object(map) => Ok(AnalyticsEvent::new(name, map)),
            _ => Err(CoreError::PayloadNotObject {
                event: name.to_string(),
            }),
        }
    }

    /// `virtual_page_view` for a view id (known or not) and title.
    ///
    /// The path is always `"/" + view_id`.
    pub fn page_view(view_id: &str, title: &str) -> CoreResult<Self> {
        AnalyticsEvent::from_payload(
            PAGE_VIEW_EVENT,
            &PageViewPayload {
                page_path: format!("/{}", view_id),
                page_title: title.to_string(),
            },
        )
    }

    /// `add_to_cart` carrying the single unit that was just added.
    pub fn add_to_cart(product: &Product, currency: &str) -> CoreResult<Self> {
        AnalyticsEvent::from_payload(
            ADD_TO_CART_EVENT,
            &AddToCartPayload {
                ecommerce: AddToCartEcommerce {
                    currency: currency.to_string(),
                    items: vec![EcommerceItem::single_unit(product)],
                },
            },
        )
    }

    /// `purchase` for a finished checkout.
    pub fn purchase(
        transaction_id: &TransactionId,
        value: Price,
        currency: &str,
        lines: &[LineItem],
    ) -> CoreResult<Self> {
        AnalyticsEvent::from_payload(
            PURCHASE_EVENT,
            &PurchasePayload {
                ecommerce: PurchaseEcommerce {
                    transaction_id: transaction_id.to_string(),
                    value: value.to_decimal_string(),
                    currency: currency.to_string(),
                    items: lines.iter().map(EcommerceItem::from).collect(),
                },
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// The merged record `{event: name, ...payload}` that goes to the
    /// data layer. Payload keys are spread last, so a payload `event` key
    /// replaces the name.
    pub fn to_record(&self) -> Value {
        let mut record = Map::with_capacity(self.payload.len() + 1);
        record.insert("event".to_string(), Value::String(self.name.clone()));
        for (key, value) in &self.payload {
            record.insert(key.clone(), value.clone());
        }
        Value::Object(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
