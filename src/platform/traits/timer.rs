//! Timer interface trait
//!
//! This module defines the timer and delay interface that platform implementations must provide.

use ezto_core::traits::TimeSource;

/// Timer interface trait
///
/// Extends the monotonic [`TimeSource`] with an async delay. The delay is one
/// of the only two suspension points of the sampling loop (the other being
/// the bounded publish), so implementations must yield to the executor
/// rather than busy-wait.
///
/// # Safety Invariants
///
/// - Timer peripheral must be initialized before use
/// - Monotonic time source (never goes backwards)
#[allow(async_fn_in_trait)]
pub trait TimerInterface: TimeSource {
    /// Suspend for at least `ms` milliseconds
    async fn delay_ms(&mut self, ms: u32);

    /// Suspend for at least `us` microseconds
    async fn delay_us(&mut self, us: u32) {
        self.delay_ms(us.div_ceil(1000)).await
    }
}
