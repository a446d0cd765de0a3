//! # View Router
//!
//! Keeps track of which view is active and flips view visibility on the
//! surface.
//!
//! ```text
//!              navigate(any id)
//!     ┌──────────────────────────────────┐
//!     ▼                                  │
//!  home-page ◄──► cart-page ◄──► thankyou-page     (no terminal state)
//!     │
//!     └──► unknown id: every view hidden, active = None
//! ```
//!
//! Page-view events and the cart re-render live in
//! `commands::navigation`; the router only does the visibility part.

use storefront_core::ViewId;
use tracing::debug;

use crate::state::page::{Element, Surface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    active: Option<ViewId>,
}

impl Router {
    /// Router whose active view is the one visible at load.
    pub fn new(initial: ViewId) -> Self {
        Router {
            active: Some(initial),
        }
    }

    pub fn active(&self) -> Option<ViewId> {
        self.active
    }

    /// Hides every view, shows `view_id` if known, and sets the title.
    ///
    /// Returns the view that is now active. An unknown id is not an error:
    /// nothing is shown and `None` is returned.
    pub fn switch_to<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        view_id: &str,
        title: &str,
    ) -> Option<ViewId> {
        for view in ViewId::ALL {
            surface.hide(Element::View(view));
        }

        self.active = ViewId::parse(view_id);
        match self.active {
            Some(view) => surface.show(Element::View(view)),
            None => debug!(view_id, "Unknown view, nothing shown"),
        }

        surface.set_title(title);
        self.active
    }
}

impl Default for Router {
    fn default() -> Self {
        Router::new(ViewId::Home)
    }
}
