//! # Cart Store
//!
//! The in-memory shopping cart for one storefront session.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Cart Call            State Change               │
//! │  ─────────              ─────────            ────────────               │
//! │                                                                         │
//! │  Click "Add" ─────────► add(product) ──────► qty += 1 or push(line)    │
//! │                                                                         │
//! │  Badge refresh ───────► total_quantity() ──► (read only)               │
//! │                                                                         │
//! │  Cart page render ────► items(), total() ──► (read only)               │
//! │                                                                         │
//! │  Checkout ────────────► snapshot(), clear() ► items.clear()            │
//! │                                                                         │
//! │  There is no remove or decrement: lines only go away on clear().       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Price;
use crate::types::{LineItem, Product};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Insertion order is preserved
/// - Every quantity is at least 1, so `total_quantity() >= item_count()`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity goes up by one
    /// - Product not in cart: appended as a new line with quantity 1
    ///
    /// Returns the line that now holds the product.
    pub fn add(&mut self, product: &Product) -> &LineItem {
        let index = match self.items.iter().position(|i| i.id == product.id) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(LineItem::first_unit(product));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Looks up a line by product id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items (the badge number).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Σ(price × quantity), computed fresh on every call.
    ///
    /// One invalid unit price makes the whole total invalid.
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Copies the lines for a purchase record.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(price_cents))
    }

    #[test]
    fn test_add_same_product_merges_lines() {
        let mut cart = Cart::new();
        let shield = product("shield", 4999);

        cart.add(&shield);
        let line = cart.add(&shield);

        assert_eq!(line.quantity, 2);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_total_quantity_across_products() {
        let mut cart = Cart::new();
        let a = product("a", 100);
        let b = product("b", 200);

        cart.add(&a);
        cart.add(&b);
        cart.add(&b);

        assert_eq!(cart.total_quantity(), 3);
        assert!(cart.total_quantity() >= cart.item_count() as u64);
    }

    #[test]
    fn test_total_sums_line_totals() {
        let mut cart = Cart::new();
        let ten = product("ten", 1000);
        let five = product("five", 500);

        cart.add(&ten);
        cart.add(&ten);
        cart.add(&five);

        assert_eq!(cart.total().cents(), Some(2500));
        assert_eq!(cart.total().to_decimal_string(), "25.00");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = Cart::new();
        cart.add(&product("b", 1));
        cart.add(&product("a", 1));
        cart.add(&product("b", 1));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_first_add_freezes_name_and_price() {
        let mut cart = Cart::new();
        cart.add(&product("a", 100));
        cart.add(&Product::new("a", "Renamed", Money::from_cents(999)));

        let line = cart.get("a").unwrap();
        assert_eq!(line.name, "Product a");
        assert_eq!(line.unit_price.cents(), Some(100));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product("a", 100));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut cart = Cart::new();
        cart.add(&product("a", 100));
        let snapshot = cart.snapshot();
        cart.clear();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_panicking() {
        let mut cart = Cart::new();
        let big = product("big", 9_000_000_000_000_000_000);
        cart.add(&big);
        cart.add(&big);
        cart.add(&product("other", 5_000_000_000_000_000_000));

        assert_eq!(cart.items()[0].line_total().cents(), Some(i64::MAX));
        assert_eq!(cart.total().cents(), Some(i64::MAX));
    }

    #[test]
    fn test_invalid_price_still_adds_and_poisons_total() {
        let mut cart = Cart::new();
        cart.add(&product("ten", 1000));
        let odd = Product::new("odd", "Odd", Price::Invalid);
        cart.add(&odd);
        let line = cart.add(&odd).clone();

        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), Price::Invalid);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total(), Price::Invalid);

        cart.clear();
        assert!(cart.total().is_zero());
    }
}
