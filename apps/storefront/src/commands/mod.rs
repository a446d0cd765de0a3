//! # Commands Module
//!
//! Every user interaction the storefront reacts to.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (UiEvent + dispatch)
//! ├── navigation.rs  ◄─── navigate, start, go_home, go_to_cart
//! ├── cart.rs        ◄─── add_to_cart, render_cart, CartView
//! └── checkout.rs    ◄─── checkout
//! ```
//!
//! ## How Events Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  click on the page / line in the shell                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  UiEvent::AddToCart(attrs)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&mut store, event)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::add_to_cart(&mut store, &attrs) ──► Cart, Page, data layer       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each reaction runs to completion before the next one starts.

pub mod cart;
pub mod checkout;
pub mod navigation;

use storefront_core::{AnalyticsEvent, CoreResult, LineItem, ProductAttributes, ViewId};
use tracing::warn;

use crate::state::{Storefront, Surface};

use self::checkout::CheckoutReceipt;

/// Input the storefront understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Header home link.
    HomeLink,
    /// Header cart link.
    CartLink,
    /// "Add to cart" on a product card.
    AddToCart(ProductAttributes),
    /// Checkout button on the cart page.
    Checkout,
    /// "Continue shopping" on the thank-you page.
    ShopMore,
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigated(Option<ViewId>),
    Added(LineItem),
    CheckedOut(CheckoutReceipt),
}

/// Routes a UI event to its command.
///
/// Never fails: malformed input is logged and carried through.
pub fn dispatch<S: Surface>(store: &mut Storefront<S>, event: UiEvent) -> Outcome {
    match event {
        UiEvent::HomeLink | UiEvent::ShopMore => Outcome::Navigated(navigation::go_home(store)),
        UiEvent::CartLink => Outcome::Navigated(navigation::go_to_cart(store)),
        UiEvent::AddToCart(attrs) => Outcome::Added(cart::add_to_cart(store, &attrs)),
        UiEvent::Checkout => Outcome::CheckedOut(checkout::checkout(store)),
    }
}

/// Emits an event that may have failed to build.
///
/// A build failure is logged and dropped like any other analytics failure.
pub(crate) fn emit_event<S: Surface>(store: &mut Storefront<S>, event: CoreResult<AnalyticsEvent>) {
    match event {
        Ok(event) => store.emitter.emit(event),
        Err(err) => warn!(error = %err, "Analytics event could not be built"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ManualClock, Page, SharedDataLayer, StoreConfig};
    use std::sync::Arc;
    use storefront_core::Price;

    fn store() -> (Storefront<Page>, SharedDataLayer) {
        let data_layer = SharedDataLayer::new();
        let store = Storefront::with_page(
            StoreConfig::default(),
            Some(Box::new(data_layer.clone())),
            Arc::new(ManualClock::new(0)),
        );
        (store, data_layer)
    }

    #[test]
    fn test_full_shopping_trip() {
        let (mut store, data_layer) = store();
        navigation::start(&mut store);

        let shield = ProductAttributes::new("shield-001", "Vibranium Shield", "49.99");
        dispatch(&mut store, UiEvent::AddToCart(shield.clone()));
        dispatch(&mut store, UiEvent::AddToCart(shield));
        dispatch(&mut store, UiEvent::CartLink);
        let outcome = dispatch(&mut store, UiEvent::Checkout);
        dispatch(&mut store, UiEvent::ShopMore);

        let Outcome::CheckedOut(receipt) = outcome else {
            panic!("expected checkout outcome");
        };
        assert_eq!(receipt.value.cents(), Some(9998));
        assert_eq!(store.active_view(), Some(ViewId::Home));

        let names: Vec<String> = data_layer
            .records()
            .iter()
            .map(|r| r["event"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "virtual_page_view",
                "add_to_cart",
                "add_to_cart",
                "virtual_page_view",
                "purchase",
                "virtual_page_view",
            ]
        );
    }

    #[test]
    fn test_malformed_add_still_reaches_checkout() {
        let (mut store, data_layer) = store();
        dispatch(
            &mut store,
            UiEvent::AddToCart(ProductAttributes::new("odd", "Odd", "not-a-price")),
        );
        dispatch(
            &mut store,
            UiEvent::AddToCart(ProductAttributes::new("ok", "Ok", "2.50")),
        );

        let Outcome::CheckedOut(receipt) = dispatch(&mut store, UiEvent::Checkout) else {
            panic!("expected checkout outcome");
        };

        assert_eq!(receipt.value, Price::Invalid);
        assert_eq!(receipt.line_count, 2);
        let purchase = &data_layer.events_named("purchase")[0];
        assert_eq!(purchase["ecommerce"]["value"], "NaN");
        assert_eq!(purchase["ecommerce"]["items"][0]["price"], serde_json::Value::Null);
        assert_eq!(purchase["ecommerce"]["items"][1]["price"], serde_json::json!(2.5));
        assert!(store.cart().is_empty());
        assert_eq!(store.active_view(), Some(ViewId::ThankYou));
    }

    #[test]
    fn test_huge_prices_checkout_without_panicking() {
        let (mut store, data_layer) = store();
        let big = ProductAttributes::new("big", "Big", "50000000000000000");
        dispatch(&mut store, UiEvent::AddToCart(big.clone()));
        dispatch(&mut store, UiEvent::AddToCart(big));
        dispatch(&mut store, UiEvent::CartLink);

        let Outcome::CheckedOut(receipt) = dispatch(&mut store, UiEvent::Checkout) else {
            panic!("expected checkout outcome");
        };

        assert_eq!(receipt.value.cents(), Some(i64::MAX));
        assert_eq!(
            data_layer.events_named("purchase")[0]["ecommerce"]["value"],
            "92233720368547758.07"
        );
    }

    #[test]
    fn test_home_link_and_shop_more_match() {
        let (mut store, _) = store();
        assert_eq!(
            dispatch(&mut store, UiEvent::HomeLink),
            Outcome::Navigated(Some(ViewId::Home))
        );
        assert_eq!(
            dispatch(&mut store, UiEvent::ShopMore),
            Outcome::Navigated(Some(ViewId::Home))
        );
    }
}
