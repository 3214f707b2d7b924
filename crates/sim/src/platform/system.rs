//! Host memory probe.

use std::fs;

use ezto_node::platform::SystemInterface;

/// Reported when the host does not expose its memory figures.
const FALLBACK_FREE_BYTES: i32 = 160 * 1024;

/// Free memory read from `/proc/meminfo` (`MemAvailable`), clamped to the
/// `i32` range the telemetry document carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl HostSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemInterface for HostSystem {
    fn free_memory(&self) -> i32 {
        fs::read_to_string("/proc/meminfo")
            .ok()
            .and_then(|text| parse_mem_available(&text))
            .map(|bytes| i32::try_from(bytes).unwrap_or(i32::MAX))
            .unwrap_or(FALLBACK_FREE_BYTES)
    }
}

/// `MemAvailable` in bytes.
fn parse_mem_available(meminfo: &str) -> Option<u64> {
    let line = meminfo
        .lines()
        .find(|line| line.starts_with("MemAvailable:"))?;
    let kib: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kib * 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mem_available() {
        let text = "MemTotal:       16318480 kB\nMemFree:         1200000 kB\nMemAvailable:      12345 kB\n";
        assert_eq!(parse_mem_available(text), Some(12345 * 1024));
        assert_eq!(parse_mem_available("MemTotal: 1 kB\n"), None);
    }

    #[test]
    fn test_free_memory_is_positive() {
        assert!(HostSystem::new().free_memory() > 0);
    }
}
