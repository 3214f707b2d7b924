//! Host timing.
//!
//! `TokioTimer` is the monotonic clock and delay source for the loop;
//! `SystemWallClock` supplies the Unix time used in document keys.

use std::time::{SystemTime, UNIX_EPOCH};

use ezto_core::traits::{TimeSource, WallClock};
use ezto_node::platform::TimerInterface;
use tokio::time::{Duration, Instant};

/// Monotonic timer measured from its creation.
#[derive(Debug, Clone, Copy)]
pub struct TokioTimer {
    start: Instant,
}

impl TokioTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for TokioTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for TokioTimer {
    fn now_us(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

impl TimerInterface for TokioTimer {
    async fn delay_ms(&mut self, ms: u32) {
        tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
    }

    async fn delay_us(&mut self, us: u32) {
        tokio::time::sleep(Duration::from_micros(u64::from(us))).await;
    }
}

/// Host wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn unix_time_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delay_advances_monotonic_time() {
        let mut timer = TokioTimer::new();
        timer.delay_ms(250).await;
        assert!(timer.now_ms() >= 250);

        let before = timer.now_us();
        timer.delay_us(1500).await;
        assert!(timer.elapsed_since(before) >= 1500);
    }

    #[test]
    fn test_wall_clock_is_after_2024() {
        assert!(SystemWallClock.unix_time_ms() > 1_704_067_200_000);
    }
}
