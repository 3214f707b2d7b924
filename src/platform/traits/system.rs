//! System resource queries

/// Read-only system resource queries
pub trait SystemInterface {
    /// Free heap memory in bytes
    fn free_memory(&self) -> i32;
}
