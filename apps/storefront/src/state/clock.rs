//! # Clocks
//!
//! Time sources for the session: a monotonic instant for the notification
//! timers and wall-clock milliseconds for transaction ids.
//!
//! - [`TokioClock`]: the shell. Follows tokio's clock, so a paused runtime
//!   in tests moves it too.
//! - [`ManualClock`]: unit tests. Time only moves when `advance` is called.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

pub trait Clock {
    /// Monotonic now.
    fn now(&self) -> Instant;

    /// Milliseconds since the unix epoch.
    fn unix_millis(&self) -> i64;
}

/// Clock backed by `tokio::time` and `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn unix_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Virtual clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    unix_origin_millis: i64,
    elapsed_nanos: AtomicU64,
}

impl ManualClock {
    /// Starts at the real current instant and the given wall-clock millis.
    pub fn new(unix_origin_millis: i64) -> Self {
        ManualClock {
            origin: Instant::now(),
            unix_origin_millis,
            elapsed_nanos: AtomicU64::new(0),
        }
    }

    /// Moves both time sources forward, saturating at `u64::MAX` nanos.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let _ = self
            .elapsed_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(nanos))
            });
    }

    fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos.load(Ordering::SeqCst))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn unix_millis(&self) -> i64 {
        let elapsed_millis = i64::try_from(self.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.unix_origin_millis.saturating_add(elapsed_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_only_moves_on_advance() {
        let clock = ManualClock::new(1_000);
        let start = clock.now();
        assert_eq!(clock.now(), start);
        assert_eq!(clock.unix_millis(), 1_000);

        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
        assert_eq!(clock.unix_millis(), 1_250);
    }

    #[test]
    fn test_manual_clock_advance_saturates() {
        let clock = ManualClock::new(0);
        clock.advance(Duration::from_nanos(u64::MAX - 5));
        clock.advance(Duration::from_secs(1));

        assert_eq!(clock.elapsed(), Duration::from_nanos(u64::MAX));
        assert_eq!(clock.unix_millis(), (u64::MAX / 1_000_000) as i64);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_follows_paused_time() {
        let clock = TokioClock;
        let start = clock.now();
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(clock.now() - start >= Duration::from_secs(2));
    }
}
