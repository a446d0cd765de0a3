//! # State Module
//!
//! The pieces a storefront session is made of.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (session.rs)                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │             │              │               │                 │
//! │          ▼             ▼              ▼               ▼                 │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────────┐ ┌──────────────────┐   │
//! │  │ config.rs  │ │ router.rs  │ │ analytics.rs │ │ notification.rs  │   │
//! │  │ StoreConfig│ │ Router     │ │ Emitter,     │ │ + clock.rs       │   │
//! │  │            │ │ + page.rs  │ │ sinks        │ │                  │   │
//! │  └────────────┘ └────────────┘ └──────────────┘ └──────────────────┘   │
//! │                                                                         │
//! │  The cart itself is storefront_core::Cart, owned by the session.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod analytics;
mod clock;
mod config;
mod notification;
mod page;
mod router;
mod session;

pub use analytics::{AnalyticsEmitter, DataLayerSink, JsonLinesSink, SharedDataLayer};
pub use clock::{Clock, ManualClock, TokioClock};
pub use config::{
    default_config_path, CatalogEntry, NotificationConfig, StoreConfig, CONFIG_FILE_NAME,
    THANK_YOU_TITLE,
};
pub use notification::{Notification, NotificationPhase};
pub use page::{CartRow, Element, Page, Surface};
pub use router::Router;
pub use session::Storefront;
