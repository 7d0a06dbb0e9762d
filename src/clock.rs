use std::thread;
use std::time::{Duration, Instant};

use crate::controller::FrameClock;

/// Returns the time budget of one tick at `ticks_per_second` (treated as at least 1).
#[must_use]
pub fn tick_interval(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}

/// Sleeping frame limiter: each call returns no sooner than one interval
/// after the previous call returned.
#[derive(Debug, Default)]
pub struct FrameLimiter {
    last_tick: Option<Instant>,
}

impl FrameLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for FrameLimiter {
    fn wait_for_next_tick(&mut self, ticks_per_second: u32) {
        if let Some(last_tick) = self.last_tick {
            let deadline = last_tick + tick_interval(ticks_per_second);
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }

        self.last_tick = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::controller::FrameClock;

    use super::{FrameLimiter, tick_interval};

    #[test]
    fn interval_shrinks_as_speed_grows() {
        assert_eq!(tick_interval(10), Duration::from_millis(100));
        assert_eq!(tick_interval(20), Duration::from_millis(50));
        assert_eq!(tick_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn limiter_waits_out_the_interval() {
        let mut limiter = FrameLimiter::new();
        limiter.wait_for_next_tick(50);

        let start = Instant::now();
        limiter.wait_for_next_tick(50);

        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
