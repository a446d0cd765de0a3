//! # Cart Commands
//!
//! Adding to the cart and rendering it.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add_to_cart  ┌──────────┐  checkout   ┌──────────────┐   │
//! │  │  Empty   │──────────────►│ In Cart  │────────────►│ Thank You    │   │
//! │  │  Cart    │               │          │             │ (cart empty) │   │
//! │  └──────────┘               └──────────┘             └──────────────┘   │
//! │       ▲                      │      ▲                       │           │
//! │       │                      └──────┘ add_to_cart           │           │
//! │       └─────────────────────────────────────────────────────┘           │
//! │                         shop-more                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{AnalyticsEvent, Cart, LineItem, Product, ProductAttributes};
use tracing::{debug, warn};

use crate::commands::emit_event;
use crate::state::{CartRow, Element, Storefront, Surface};

/// What the cart page shows. A pure projection of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    /// Formatted grand total; `None` when the cart is empty.
    pub total: Option<String>,
}

impl CartView {
    pub fn project(cart: &Cart, currency_symbol: &str) -> Self {
        if cart.is_empty() {
            return CartView {
                rows: Vec::new(),
                total: None,
            };
        }

        let rows = cart
            .items()
            .iter()
            .map(|item| CartRow {
                label: format!("{} (x{})", item.name, item.quantity),
                amount: item.line_total().format_with(currency_symbol),
            })
            .collect();

        CartView {
            rows,
            total: Some(cart.total().format_with(currency_symbol)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_none()
    }

    /// Rebuilds the cart list and toggles empty message vs summary.
    pub fn apply<S: Surface + ?Sized>(self, surface: &mut S) {
        surface.replace_rows(Element::CartItems, self.rows);

        match self.total {
            None => {
                surface.show(Element::EmptyCartMessage);
                surface.hide(Element::CartSummary);
            }
            Some(total) => {
                surface.hide(Element::EmptyCartMessage);
                surface.show(Element::CartSummary);
                surface.set_text(Element::CartTotal, total);
            }
        }
    }
}

/// Projects the cart onto the surface. Never mutates the cart.
pub fn render_cart<S: Surface>(store: &mut Storefront<S>) -> CartView {
    let view = CartView::project(&store.cart, &store.config.currency_symbol);
    debug!(rows = view.rows.len(), total = ?view.total, "render_cart");
    view.clone().apply(&mut store.surface);
    view
}

/// Adds one unit of the product behind an "add" control.
///
/// ## Steps
/// 1. Read the card attributes as they are (bad price: `Price::Invalid`)
/// 2. Merge into the cart
/// 3. Refresh the count badge
/// 4. Show the toast
/// 5. Emit `add_to_cart` for the single unit
///
/// Malformed attributes are logged and carried along, so the cart total
/// and the purchase value come out invalid rather than the click failing.
///
/// ## Returns
/// The cart line now holding the product.
pub fn add_to_cart<S: Surface>(
    store: &mut Storefront<S>,
    attrs: &ProductAttributes,
) -> LineItem {
    let _span = store.span().clone().entered();
    debug!(product_id = %attrs.product_id, "add_to_cart command");

    let product = Product::from_attributes(attrs);
    if !product.price.is_valid() {
        warn!(
            product_id = %attrs.product_id,
            price = %attrs.price,
            "Unparsable price, cart total will be invalid"
        );
    }
    if product.id.trim().is_empty() || product.name.trim().is_empty() {
        warn!(
            product_id = %attrs.product_id,
            name = %attrs.name,
            "Product card is missing attributes"
        );
    }

    let line = store.cart.add(&product).clone();
    store.update_cart_count();
    store.show_notification();

    let event = AnalyticsEvent::add_to_cart(&product, &store.config.currency_code);
    emit_event(store, event);

    line
}
