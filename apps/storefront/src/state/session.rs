//! # Storefront Session
//!
//! Everything one running storefront owns, in one value.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront<S: Surface>                          │
//! │                                                                         │
//! │   config ──── titles, currency, catalog (read-only)                     │
//! │   cart ────── Cart (only commands mutate it)                            │
//! │   router ──── active view                                               │
//! │   surface ─── S (Page in the shell and tests)                           │
//! │   emitter ─── AnalyticsEmitter → Option<dyn DataLayerSink>              │
//! │   notification + clock ─── toast timers                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read access is open through getters. Writes go through `commands`,
//! which receive `&mut Storefront`.

use std::sync::Arc;
use std::time::Instant;

use storefront_core::{Cart, ViewId};
use tracing::{debug, info_span, Span};
use uuid::Uuid;

use crate::state::analytics::{AnalyticsEmitter, DataLayerSink};
use crate::state::clock::Clock;
use crate::state::config::StoreConfig;
use crate::state::notification::{Notification, NotificationPhase};
use crate::state::page::{Element, Page, Surface};
use crate::state::router::Router;

pub struct Storefront<S: Surface> {
    session_id: Uuid,
    span: Span,
    pub(crate) config: StoreConfig,
    pub(crate) cart: Cart,
    pub(crate) router: Router,
    pub(crate) surface: S,
    pub(crate) emitter: AnalyticsEmitter,
    pub(crate) notification: Notification,
    pub(crate) clock: Arc<dyn Clock>,
}

impl<S: Surface> Storefront<S> {
    /// Builds a session on an already-loaded surface showing the home view.
    pub fn new(
        config: StoreConfig,
        surface: S,
        sink: Option<Box<dyn DataLayerSink>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session_id = Uuid::new_v4();
        let span = info_span!("storefront", session = %session_id);
        let notification = Notification::from_config(&config.notification);

        span.in_scope(|| debug!(data_layer = sink.is_some(), "Session created"));

        Storefront {
            session_id,
            span,
            config,
            cart: Cart::new(),
            router: Router::new(ViewId::Home),
            surface,
            emitter: AnalyticsEmitter::new(sink),
            notification,
            clock,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Tracing span that commands enter for this session.
    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn active_view(&self) -> Option<ViewId> {
        self.router.active()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notification_phase(&self) -> NotificationPhase {
        self.notification.phase()
    }

    pub fn notification_deadline(&self) -> Option<Instant> {
        self.notification.next_deadline()
    }

    /// Applies due notification transitions to the surface.
    ///
    /// Returns the new phase when one was entered.
    pub fn tick(&mut self) -> Option<NotificationPhase> {
        let phase = self.notification.advance(self.clock.now())?;
        match phase {
            NotificationPhase::Fading => self.surface.set_opacity(Element::Notification, 0.0),
            NotificationPhase::Hidden => self.surface.hide(Element::Notification),
            NotificationPhase::Visible => {}
        }
        self.span
            .in_scope(|| debug!(phase = %phase, "Notification phase changed"));
        Some(phase)
    }

    /// Shows the add-to-cart toast at full opacity and restarts its timers.
    pub(crate) fn show_notification(&mut self) {
        self.surface.show(Element::Notification);
        self.surface.set_opacity(Element::Notification, 1.0);
        self.notification.show(self.clock.now());
    }

    /// Writes the total quantity into the badge.
    pub(crate) fn update_cart_count(&mut self) {
        let count = self.cart.total_quantity();
        self.surface.set_text(Element::CartCount, count.to_string());
    }
}

impl Storefront<Page> {
    /// A session on a fresh [`Page`] titled with the home title.
    pub fn with_page(
        config: StoreConfig,
        sink: Option<Box<dyn DataLayerSink>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let page = Page::new(config.home_title());
        Storefront::new(config, page, sink, clock)
    }

    pub fn page(&self) -> &Page {
        &self.surface
    }
}

impl<S: Surface> std::fmt::Debug for Storefront<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("session_id", &self.session_id)
            .field("cart", &self.cart)
            .field("active_view", &self.router.active())
            .field("emitter", &self.emitter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::analytics::SharedDataLayer;
    use crate::state::clock::ManualClock;
    use std::time::Duration;

    #[test]
    fn test_new_session_starts_home_and_empty() {
        let store = Storefront::with_page(
            StoreConfig::default(),
            Some(Box::new(SharedDataLayer::new())),
            Arc::new(ManualClock::new(0)),
        );
        assert_eq!(store.active_view(), Some(ViewId::Home));
        assert!(store.cart().is_empty());
        assert_eq!(store.page().title(), "Avengers Gear Store - Home");
        assert_eq!(store.notification_phase(), NotificationPhase::Hidden);
    }

    #[test]
    fn test_tick_drives_notification_on_surface() {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = Storefront::with_page(StoreConfig::default(), None, clock.clone());

        store.show_notification();
        assert!(store.page().is_visible(Element::Notification));
        assert_eq!(store.tick(), None);

        clock.advance(Duration::from_millis(500));
        assert_eq!(store.tick(), Some(NotificationPhase::Fading));
        assert_eq!(store.page().opacity(Element::Notification), 0.0);
        assert!(store.page().is_visible(Element::Notification));

        clock.advance(Duration::from_millis(500));
        assert_eq!(store.tick(), Some(NotificationPhase::Hidden));
        assert!(!store.page().is_visible(Element::Notification));
        assert_eq!(store.notification_deadline(), None);
    }
}
