//! Periodic tick timing for the cooperative control loop.

use embassy_time::{Duration, Instant};

/// Default chase cadence.
pub const DEFAULT_TICK: Duration = Duration::from_millis(150);

/// Fixed-interval timer polled from the control loop.
///
/// If the loop stalls for more than one interval, the schedule snaps to `now`
/// and the backlog is skipped instead of replayed as a burst.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// Create a ticker that fires on its first poll.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::from_millis(0),
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Report whether the interval elapsed, advancing the schedule if so.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.as_millis() < self.next.as_millis() {
            return false;
        }
        if now.as_millis() > self.next.as_millis() + self.interval.as_millis() {
            self.next = now;
        }
        self.next += self.interval;
        true
    }
}
