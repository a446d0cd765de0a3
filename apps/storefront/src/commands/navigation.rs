//! # Navigation Commands
//!
//! ## navigate(view_id, title, emit_page_view)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Router hides every view, shows the target (unknown: none)          │
//! │  2. Document title = title                                             │
//! │  3. emit_page_view?  ──► virtual_page_view { page_path: "/<id>", ... } │
//! │  4. target == cart-page ──► render_cart()  (every time, even if the    │
//! │                                             cart page is already up)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{AnalyticsEvent, ViewId};
use tracing::debug;

use crate::commands::cart::render_cart;
use crate::commands::emit_event;
use crate::state::{Storefront, Surface};

/// Switches views, updates the title, and tracks the page view.
///
/// Returns the view that is now active (`None` for an unknown id).
pub fn navigate<S: Surface>(
    store: &mut Storefront<S>,
    view_id: &str,
    title: &str,
    emit_page_view: bool,
) -> Option<ViewId> {
    let _span = store.span().clone().entered();
    debug!(view_id, title, emit_page_view, "navigate command");

    let active = store.router.switch_to(&mut store.surface, view_id, title);

    if emit_page_view {
        emit_event(store, AnalyticsEvent::page_view(view_id, title));
    }

    if view_id == ViewId::Cart.as_str() {
        render_cart(store);
    }

    active
}

/// Startup: the home view is already visible, so only the first page view
/// is pushed.
pub fn start<S: Surface>(store: &mut Storefront<S>) {
    let _span = store.span().clone().entered();
    let title = store.config.home_title();
    debug!(title = %title, "start command");

    store.surface.set_title(&title);
    store.update_cart_count();
    emit_event(store, AnalyticsEvent::page_view(ViewId::Home.as_str(), &title));
}

/// Home link and "continue shopping".
pub fn go_home<S: Surface>(store: &mut Storefront<S>) -> Option<ViewId> {
    let title = store.config.home_title();
    navigate(store, ViewId::Home.as_str(), &title, true)
}

/// Cart link.
pub fn go_to_cart<S: Surface>(store: &mut Storefront<S>) -> Option<ViewId> {
    let title = store.config.cart_title();
    navigate(store, ViewId::Cart.as_str(), &title, true)
}
