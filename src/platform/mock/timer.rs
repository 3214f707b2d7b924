//! Mock Timer implementation for testing

use core::cell::Cell;
use std::vec::Vec;

use ezto_core::traits::TimeSource;

use crate::platform::traits::TimerInterface;

/// Mock Timer implementation
///
/// Delays complete immediately and advance simulated time by the requested
/// amount. Every requested delay is logged for test verification.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: Cell<u64>,
    delays_ms: Vec<u32>,
}

impl MockTimer {
    /// Create a new mock timer at time 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance simulated time without a delay call
    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get().saturating_add(us));
    }

    /// Delays requested so far, in milliseconds
    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }
}

impl TimeSource for MockTimer {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

impl TimerInterface for MockTimer {
    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        self.advance_us(u64::from(ms) * 1000);
    }
}
