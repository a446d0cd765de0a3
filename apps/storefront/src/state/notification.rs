//! # Add-to-Cart Notification
//!
//! The "+1 added" toast as a two-phase scheduled state machine.
//!
//! ```text
//!          show(now)              now >= fade_at          now >= hide_at
//!  Hidden ──────────► Visible ──────────────────► Fading ──────────────► Hidden
//!    ▲                  │  ▲                        │
//!    │                  └──┘ show(now) restarts     │ show(now) restarts
//!    │                                              │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! Purely cosmetic: no cart invariant depends on it. The session polls it
//! with `advance(now)` and the shell sleeps until `next_deadline()`.

use std::fmt;
use std::time::{Duration, Instant};

use crate::state::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Hidden,
    Visible,
    Fading,
}

impl fmt::Display for NotificationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationPhase::Hidden => "hidden",
            NotificationPhase::Visible => "visible",
            NotificationPhase::Fading => "fading",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    phase: NotificationPhase,
    fade_after: Duration,
    hide_after: Duration,
    fade_at: Option<Instant>,
    hide_at: Option<Instant>,
}

impl Notification {
    pub fn new(fade_after: Duration, hide_after: Duration) -> Self {
        Notification {
            phase: NotificationPhase::Hidden,
            fade_after,
            hide_after,
            fade_at: None,
            hide_at: None,
        }
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        Notification::new(config.fade_after(), config.hide_after())
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    /// Shows the toast and (re)starts both timers from `now`.
    pub fn show(&mut self, now: Instant) {
        let fade_at = now + self.fade_after;
        self.phase = NotificationPhase::Visible;
        self.fade_at = Some(fade_at);
        self.hide_at = Some(fade_at + self.hide_after);
    }

    /// Applies every transition due at `now`.
    ///
    /// Returns the new phase when it changed. A poll that is late enough to
    /// skip the fading phase lands directly on `Hidden`.
    pub fn advance(&mut self, now: Instant) -> Option<NotificationPhase> {
        let before = self.phase;

        if self.phase == NotificationPhase::Visible && self.fade_at.is_some_and(|at| now >= at) {
            self.phase = NotificationPhase::Fading;
        }
        if self.phase == NotificationPhase::Fading && self.hide_at.is_some_and(|at| now >= at) {
            self.phase = NotificationPhase::Hidden;
            self.fade_at = None;
            self.hide_at = None;
        }

        (self.phase != before).then_some(self.phase)
    }

    /// When the next transition is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            NotificationPhase::Hidden => None,
            NotificationPhase::Visible => self.fade_at,
            NotificationPhase::Fading => self.hide_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn toast() -> Notification {
        Notification::new(500 * MS, 500 * MS)
    }

    #[test]
    fn test_full_cycle() {
        let t0 = Instant::now();
        let mut n = toast();
        assert_eq!(n.phase(), NotificationPhase::Hidden);
        assert_eq!(n.next_deadline(), None);

        n.show(t0);
        assert_eq!(n.phase(), NotificationPhase::Visible);
        assert_eq!(n.next_deadline(), Some(t0 + 500 * MS));

        assert_eq!(n.advance(t0 + 499 * MS), None);
        assert_eq!(n.advance(t0 + 500 * MS), Some(NotificationPhase::Fading));
        assert_eq!(n.next_deadline(), Some(t0 + 1000 * MS));

        assert_eq!(n.advance(t0 + 999 * MS), None);
        assert_eq!(n.advance(t0 + 1000 * MS), Some(NotificationPhase::Hidden));
        assert_eq!(n.next_deadline(), None);
    }

    #[test]
    fn test_late_poll_skips_to_hidden() {
        let t0 = Instant::now();
        let mut n = toast();
        n.show(t0);
        assert_eq!(n.advance(t0 + 5000 * MS), Some(NotificationPhase::Hidden));
    }

    #[test]
    fn test_reshow_restarts_timers() {
        let t0 = Instant::now();
        let mut n = toast();
        n.show(t0);
        n.advance(t0 + 600 * MS);
        assert_eq!(n.phase(), NotificationPhase::Fading);

        n.show(t0 + 700 * MS);
        assert_eq!(n.phase(), NotificationPhase::Visible);
        assert_eq!(n.advance(t0 + 1000 * MS), None);
        assert_eq!(n.advance(t0 + 1200 * MS), Some(NotificationPhase::Fading));
        assert_eq!(n.advance(t0 + 1700 * MS), Some(NotificationPhase::Hidden));
    }

    #[test]
    fn test_advance_while_hidden_is_noop() {
        let mut n = toast();
        assert_eq!(n.advance(Instant::now()), None);
    }
}
