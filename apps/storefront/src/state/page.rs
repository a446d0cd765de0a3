//! # Page Surface
//!
//! The visual surface the storefront draws on.
//!
//! ## Elements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <title>                                  [cart-count]                  │
//! │  ┌───────────────────────────────────────────────────────────────────┐  │
//! │  │ View(home-page) │ View(cart-page) │ View(thankyou-page)           │  │
//! │  │                 │                 │                               │  │
//! │  │  product cards  │  cart-items     │  order-id                     │  │
//! │  │                 │  empty-message  │                               │  │
//! │  │                 │  cart-summary   │                               │  │
//! │  │                 │   └ cart-total  │                               │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! │                                         [add-to-cart-notification]      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands only talk to the [`Surface`] trait. [`Page`] is the in-memory
//! implementation the shell prints and the tests inspect.

use std::collections::{HashMap, HashSet};

use storefront_core::ViewId;

/// Addressable elements on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    View(ViewId),
    CartCount,
    Notification,
    CartItems,
    EmptyCartMessage,
    CartSummary,
    CartTotal,
    OrderId,
}

/// One rendered cart line: `"Shield (x2)"` and `"$99.98"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub label: String,
    pub amount: String,
}

/// What commands may do to the page.
pub trait Surface {
    fn show(&mut self, element: Element);
    fn hide(&mut self, element: Element);
    fn set_text(&mut self, element: Element, text: String);
    fn set_title(&mut self, title: &str);
    fn set_opacity(&mut self, element: Element, opacity: f32);
    /// Drops every row in `container` and inserts `rows`.
    fn replace_rows(&mut self, container: Element, rows: Vec<CartRow>);
}

/// Headless document state.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    hidden: HashSet<Element>,
    text: HashMap<Element, String>,
    opacity: HashMap<Element, f32>,
    rows: HashMap<Element, Vec<CartRow>>,
}

impl Page {
    /// The page as first loaded: home visible, everything else that starts
    /// hidden in the markup hidden, badge at zero.
    pub fn new(title: impl Into<String>) -> Self {
        let hidden = [
            Element::View(ViewId::Cart),
            Element::View(ViewId::ThankYou),
            Element::Notification,
            Element::CartSummary,
        ]
        .into_iter()
        .collect();

        let mut text = HashMap::new();
        text.insert(Element::CartCount, "0".to_string());

        Page {
            title: title.into(),
            hidden,
            text,
            opacity: HashMap::new(),
            rows: HashMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self, element: Element) -> bool {
        !self.hidden.contains(&element)
    }

    /// The single visible view, if exactly one is.
    pub fn visible_view(&self) -> Option<ViewId> {
        let mut visible = ViewId::ALL
            .into_iter()
            .filter(|v| self.is_visible(Element::View(*v)));
        match (visible.next(), visible.next()) {
            (Some(view), None) => Some(view),
            _ => None,
        }
    }

    pub fn text(&self, element: Element) -> Option<&str> {
        self.text.get(&element).map(String::as_str)
    }

    /// Opacity as last set; elements start fully opaque.
    pub fn opacity(&self, element: Element) -> f32 {
        self.opacity.get(&element).copied().unwrap_or(1.0)
    }

    pub fn rows(&self, container: Element) -> &[CartRow] {
        self.rows.get(&container).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Surface for Page {
    fn show(&mut self, element: Element) {
        self.hidden.remove(&element);
    }

    fn hide(&mut self, element: Element) {
        self.hidden.insert(element);
    }

    fn set_text(&mut self, element: Element, text: String) {
        self.text.insert(element, text);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_opacity(&mut self, element: Element, opacity: f32) {
        self.opacity.insert(element, opacity);
    }

    fn replace_rows(&mut self, container: Element, rows: Vec<CartRow>) {
        self.rows.insert(container, rows);
    }
}
