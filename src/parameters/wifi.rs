//! WiFi credentials
//!
//! Both values are required. The password is never logged.

use heapless::String;

use super::{required, ConfigError, RawParams};

/// Maximum SSID length (IEEE 802.11 standard)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WiFi password length (WPA2 standard)
pub const MAX_PASSWORD_LEN: usize = 63;

/// Station credentials
#[derive(Clone)]
pub struct WifiParams {
    /// WiFi network SSID
    pub ssid: String<MAX_SSID_LEN>,
    /// WiFi password (WPA2)
    pub password: String<MAX_PASSWORD_LEN>,
}

impl WifiParams {
    pub(crate) fn load(raw: &RawParams<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            ssid: required("WIFI_SSID", raw.wifi_ssid)?,
            password: required("WIFI_PASSWORD", raw.wifi_password)?,
        })
    }
}

impl core::fmt::Debug for WifiParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WifiParams")
            .field("ssid", &self.ssid)
            .field("password", &"<hidden>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::tests::raw;

    #[test]
    fn test_password_hidden_from_debug() {
        let params = WifiParams::load(&raw()).unwrap();
        let rendered = format!("{:?}", params);
        assert!(rendered.contains("gym-floor"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn test_oversized_ssid() {
        let long_ssid = "s".repeat(MAX_SSID_LEN + 1);
        assert_eq!(
            WifiParams::load(&RawParams {
                wifi_ssid: &long_ssid,
                ..raw()
            })
            .unwrap_err(),
            ConfigError::TooLong("WIFI_SSID")
        );
    }
}
