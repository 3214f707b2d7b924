//! Mock wireless link for testing

use std::string::String;

use crate::platform::{
    error::{NetworkError, PlatformError},
    traits::NetworkInterface,
    Result,
};

/// Mock network interface
///
/// Fails the first N join attempts, then associates.
#[derive(Debug)]
pub struct MockNetwork {
    failures_before_join: u32,
    join_attempts: u32,
    connected: bool,
    rssi: i32,
    joined_ssid: Option<String>,
}

impl MockNetwork {
    /// Network that accepts the first join attempt
    pub fn new() -> Self {
        Self::failing(0)
    }

    /// Network that rejects the first `attempts` joins
    pub fn failing(attempts: u32) -> Self {
        Self {
            failures_before_join: attempts,
            join_attempts: 0,
            connected: false,
            rssi: -60,
            joined_ssid: None,
        }
    }

    /// Signal strength reported while connected
    pub fn set_rssi(&mut self, rssi: i32) {
        self.rssi = rssi;
    }

    pub fn join_attempts(&self) -> u32 {
        self.join_attempts
    }

    pub fn joined_ssid(&self) -> Option<&str> {
        self.joined_ssid.as_deref()
    }
}

impl Default for MockNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkInterface for MockNetwork {
    async fn join(&mut self, ssid: &str, _password: &str) -> Result<()> {
        self.join_attempts += 1;
        if self.join_attempts <= self.failures_before_join {
            return Err(PlatformError::Network(NetworkError::JoinFailed));
        }
        self.connected = true;
        self.joined_ssid = Some(ssid.into());
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
