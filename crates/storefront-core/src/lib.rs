//! # storefront-core: Pure Business Logic for the Storefront Demo
//!
//! This crate holds the cart, money and analytics-record logic as pure code
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Shell / UI events                               │   │
//! │  │    home, cart, add <id>, checkout, shop-more                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          apps/storefront (session, router, checkout)            │   │
//! │  │          pushes records into the data layer                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ analytics │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  records  │  │   │
//! │  │   │  ViewId   │  │           │  │ LineItem  │  │  payloads │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, ViewId, TransactionId)
//! - [`money`] - Money (integer cents) and Price (money or invalid)
//! - [`cart`] - The cart store
//! - [`analytics`] - Data-layer event records
//! - [`error`] - Domain error types
//! - [`validation`] - Product attribute validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Money, Product};
//!
//! let mut cart = Cart::new();
//! let ten = Product::new("ten", "Ten", Money::from_cents(1000));
//! let five = Product::new("five", "Five", Money::from_cents(500));
//!
//! cart.add(&ten);
//! cart.add(&ten);
//! cart.add(&five);
//!
//! assert_eq!(cart.total_quantity(), 3);
//! assert_eq!(cart.total().to_decimal_string(), "25.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analytics::AnalyticsEvent;
pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Price};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency tag attached to every ecommerce event.
///
/// The storefront is single-currency; this is the default the app config
/// falls back to.
pub const DEFAULT_CURRENCY: &str = "USD";
