//! Cooperative shutdown signal

use core::sync::atomic::{AtomicBool, Ordering};

/// Cancellation flag shared between the loop and whoever stops it
///
/// The loop polls the flag once per iteration, before sampling; an
/// iteration already in progress always runs to completion. Usable from a
/// `static` since construction is `const`.
#[derive(Debug, Default)]
pub struct ShutdownSignal {
    requested: AtomicBool,
}

impl ShutdownSignal {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Ask the loop to stop at its next iteration boundary
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}
