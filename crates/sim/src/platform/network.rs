//! Wireless link stand-in.
//!
//! The host is already online, so "joining" only checks the credentials
//! against the expected access point and can be told to fail a number of
//! times first to exercise the retry path.

use ezto_node::platform::{NetworkError, NetworkInterface, PlatformError, Result};

/// Simulated station-mode link.
#[derive(Debug)]
pub struct SimNetwork {
    expected_ssid: Option<String>,
    failures_left: u32,
    connected: bool,
    rssi: i32,
}

impl SimNetwork {
    /// Link that accepts any access point.
    pub fn new() -> Self {
        Self {
            expected_ssid: None,
            failures_left: 0,
            connected: false,
            rssi: -58,
        }
    }

    /// Only accept joins to `ssid`.
    pub fn expecting(ssid: &str) -> Self {
        Self {
            expected_ssid: Some(ssid.to_string()),
            ..Self::new()
        }
    }

    /// Reject the next `count` join attempts.
    pub fn fail_joins(&mut self, count: u32) {
        self.failures_left = count;
    }

    pub fn set_rssi(&mut self, rssi: i32) {
        self.rssi = rssi;
    }
}

impl Default for SimNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkInterface for SimNetwork {
    async fn join(&mut self, ssid: &str, _password: &str) -> Result<()> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(PlatformError::Network(NetworkError::JoinFailed));
        }
        if let Some(expected) = &self.expected_ssid {
            if expected != ssid {
                return Err(PlatformError::Network(NetworkError::NotFound));
            }
        }
        self.connected = true;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn rssi(&self) -> i32 {
        if self.connected {
            self.rssi
        } else {
            0
        }
    }
}
