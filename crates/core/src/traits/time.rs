//! Time abstraction traits for platform-agnostic timing operations.
//!
//! Two clocks are involved in one loop iteration:
//!
//! - [`TimeSource`]: monotonic time since boot, used for cadence and
//!   execution-time statistics
//! - [`WallClock`]: UTC wall-clock time, used to stamp telemetry snapshots
//!   and derive their document keys
//!
//! Mock implementations of both are always available for host testing.

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
///
/// # Example
///
/// ```
/// use ezto_core::traits::{MockTime, TimeSource};
///
/// fn overran<T: TimeSource>(time: &T, started_us: u64, budget_us: u64) -> bool {
///     time.elapsed_since(started_us) > budget_us
/// }
///
/// let time = MockTime::new();
/// time.advance(150_000);
/// assert!(overran(&time, 0, 100_000));
/// ```
pub trait TimeSource {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }

    /// Returns current time in microseconds since system start.
    fn now_us(&self) -> u64;

    /// Returns elapsed time in microseconds since a reference point.
    ///
    /// Uses saturating subtraction to handle potential overflow.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

/// UTC wall-clock source.
///
/// Devices without network time typically start at the RTC epoch; the
/// resulting timestamps are still well-formed, just not meaningful.
pub trait WallClock {
    /// Milliseconds since the Unix epoch (UTC).
    fn unix_time_ms(&self) -> u64;
}

impl<T: WallClock + ?Sized> WallClock for &T {
    fn unix_time_ms(&self) -> u64 {
        (**self).unix_time_ms()
    }
}

// ============================================================================
// Mock Implementations (always available for testing)
// ============================================================================

/// Mock monotonic time source with controllable advancement.
///
/// ```
/// use ezto_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// time.advance(1000);
/// assert_eq!(time.now_us(), 1000);
/// assert_eq!(time.now_ms(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Cell::new(us),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, us: u64) {
        self.current_us.set(us);
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }
}

impl TimeSource for MockTime {
    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}

/// Mock wall clock returning a settable Unix time.
#[derive(Debug, Clone, Default)]
pub struct MockWallClock {
    unix_ms: Cell<u64>,
}

impl MockWallClock {
    /// Creates a wall clock fixed at `unix_ms`.
    pub fn at(unix_ms: u64) -> Self {
        Self {
            unix_ms: Cell::new(unix_ms),
        }
    }

    /// Sets the current Unix time in milliseconds.
    pub fn set(&self, unix_ms: u64) {
        self.unix_ms.set(unix_ms);
    }

    /// Advances the clock by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.unix_ms.set(self.unix_ms.get() + ms);
    }
}

impl WallClock for MockWallClock {
    fn unix_time_ms(&self) -> u64 {
        self.unix_ms.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_initial_value() {
        let time = MockTime::new();
        assert_eq!(time.now_us(), 0);
        assert_eq!(time.now_ms(), 0);
    }

    #[test]
    fn mock_time_with_initial() {
        let time = MockTime::with_initial(5_000_000);
        assert_eq!(time.now_us(), 5_000_000);
        assert_eq!(time.now_ms(), 5000);
    }

    #[test]
    fn mock_time_advance() {
        let time = MockTime::new();
        time.advance(500_000);
        time.advance(500_000);
        assert_eq!(time.now_us(), 1_000_000);
        assert_eq!(time.now_ms(), 1000);
    }

    #[test]
    fn mock_time_elapsed_since_saturates() {
        let time = MockTime::new();
        time.set(1_000);
        assert_eq!(time.elapsed_since(300), 700);
        assert_eq!(time.elapsed_since(5_000), 0);
    }

    #[test]
    fn mock_wall_clock_advances() {
        let clock = MockWallClock::at(1_700_000_000_000);
        clock.advance_ms(250);
        assert_eq!(clock.unix_time_ms(), 1_700_000_000_250);

        clock.set(42);
        assert_eq!(clock.unix_time_ms(), 42);
    }
}
