//! # Checkout Command
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User clicks "Checkout"                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  1. transaction id = "T-<unix millis>" ──► order-id field               │
//! │  2. revenue = Σ line totals, items = cart snapshot                      │
//! │  3. purchase { transaction_id, value: "25.00", currency, items }        │
//! │  4. cart.clear(), badge = 0                                             │
//! │  5. navigate(thankyou-page, emit_page_view = false)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Thank-you page. The purchase event is the conversion, so no            │
//! │  virtual_page_view is pushed for it.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is checked first: an empty cart checks out as a zero-value
//! purchase with no items.

use storefront_core::{AnalyticsEvent, Price, TransactionId, ViewId};
use tracing::info;

use crate::commands::emit_event;
use crate::commands::navigation::navigate;
use crate::state::{Element, Storefront, Surface};

/// What a finished checkout produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub transaction_id: TransactionId,
    /// Invalid when any line's price was.
    pub value: Price,
    pub line_count: usize,
}

/// Finalizes the cart as a purchase and shows the confirmation view.
pub fn checkout<S: Surface>(store: &mut Storefront<S>) -> CheckoutReceipt {
    let _span = store.span().clone().entered();

    let transaction_id = TransactionId::from_unix_millis(store.clock.unix_millis());
    store
        .surface
        .set_text(Element::OrderId, transaction_id.to_string());

    let lines = store.cart.snapshot();
    let value = store.cart.total();

    let event = AnalyticsEvent::purchase(
        &transaction_id,
        value,
        &store.config.currency_code,
        &lines,
    );
    emit_event(store, event);

    info!(
        transaction_id = %transaction_id,
        value = %value,
        lines = lines.len(),
        "Checkout complete"
    );

    store.cart.clear();
    store.update_cart_count();

    let title = store.config.thank_you_title();
    navigate(store, ViewId::ThankYou.as_str(), title, false);

    CheckoutReceipt {
        transaction_id,
        value,
        line_count: lines.len(),
    }
}
