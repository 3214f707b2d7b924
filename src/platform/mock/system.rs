//! Mock system resource queries

use crate::platform::traits::SystemInterface;

/// Mock system with a settable free-memory figure
#[derive(Debug, Clone, Copy)]
pub struct MockSystem {
    free_memory: i32,
}

impl MockSystem {
    pub fn new(free_memory: i32) -> Self {
        Self { free_memory }
    }

    pub fn set_free_memory(&mut self, bytes: i32) {
        self.free_memory = bytes;
    }
}

impl Default for MockSystem {
    fn default() -> Self {
        Self::new(128 * 1024)
    }
}

impl SystemInterface for MockSystem {
    fn free_memory(&self) -> i32 {
        self.free_memory
    }
}
