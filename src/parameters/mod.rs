//! Node configuration
//!
//! Static configuration is baked in at build time (see `build.rs`) and
//! validated once at startup. Every value is required: an absent or empty
//! field aborts startup with [`ConfigError::Missing`].
//!
//! # Build-time variables
//!
//! | Variable           | Field                     |
//! |--------------------|---------------------------|
//! | `DEVICE_ID`        | [`DeviceParams::device_id`] |
//! | `DEVICE_LOCATION`  | [`DeviceParams::location`]  |
//! | `EXERCISE_VARIANT` | [`DeviceParams::variant`]   |
//! | `WIFI_SSID`        | [`WifiParams::ssid`]        |
//! | `WIFI_PASSWORD`    | [`WifiParams::password`]    |
//! | `STORE_URL`        | [`StoreParams::url`]        |
//! | `STORE_SECRET`     | [`StoreParams::secret`]     |
//!
//! Host harnesses bypass the build-time values with [`RawParams`].

pub mod device;
pub mod store;
pub mod wifi;

use core::fmt;

use heapless::String;

pub use device::DeviceParams;
pub use store::StoreParams;
pub use wifi::WifiParams;

/// Configuration errors, all fatal at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Required field absent or empty
    Missing(&'static str),
    /// Field longer than its storage allows
    TooLong(&'static str),
    /// Field present but not parseable, or outside its character set
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(field) => write!(f, "missing configuration value: {}", field),
            ConfigError::TooLong(field) => write!(f, "configuration value too long: {}", field),
            ConfigError::Invalid(field) => write!(f, "invalid configuration value: {}", field),
        }
    }
}

/// Unvalidated configuration values, as provided by the build or a host
/// harness
#[derive(Debug, Clone, Copy, Default)]
pub struct RawParams<'a> {
    pub device_id: &'a str,
    pub location: &'a str,
    pub variant: &'a str,
    pub wifi_ssid: &'a str,
    pub wifi_password: &'a str,
    pub store_url: &'a str,
    pub store_secret: &'a str,
}

impl RawParams<'static> {
    /// Values captured from the build environment
    pub fn from_build_env() -> Self {
        Self {
            device_id: env!("DEVICE_ID"),
            location: env!("DEVICE_LOCATION"),
            variant: env!("EXERCISE_VARIANT"),
            wifi_ssid: env!("WIFI_SSID"),
            wifi_password: env!("WIFI_PASSWORD"),
            store_url: env!("STORE_URL"),
            store_secret: env!("STORE_SECRET"),
        }
    }
}

/// Complete validated node configuration
#[derive(Debug, Clone)]
pub struct NodeParams {
    pub device: DeviceParams,
    pub wifi: WifiParams,
    pub store: StoreParams,
}

impl NodeParams {
    /// Validate raw values into a configuration
    ///
    /// Fields are checked in a fixed order (device, network, store) and the
    /// first failure is reported.
    pub fn load(raw: &RawParams<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            device: DeviceParams::load(raw)?,
            wifi: WifiParams::load(raw)?,
            store: StoreParams::load(raw)?,
        })
    }

    /// Load and validate the build-time configuration
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::load(&RawParams::from_build_env())
    }
}

/// Copy a required value into fixed storage
pub(crate) fn required<const N: usize>(
    field: &'static str,
    value: &str,
) -> Result<String<N>, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing(field));
    }
    String::try_from(value).map_err(|_| ConfigError::TooLong(field))
}

/// Like [`required`], also rejecting characters outside `allowed`
pub(crate) fn required_token<const N: usize>(
    field: &'static str,
    value: &str,
    allowed: fn(char) -> bool,
) -> Result<String<N>, ConfigError> {
    let value: String<N> = required(field, value)?;
    if !value.chars().all(allowed) {
        return Err(ConfigError::Invalid(field));
    }
    Ok(value)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn raw() -> RawParams<'static> {
        RawParams {
            device_id: "esp32-pulsera-01",
            location: "pulsera mano derecha",
            variant: "2",
            wifi_ssid: "gym-floor",
            wifi_password: "hunter22",
            store_url: "https://ezto-demo-default-rtdb.firebaseio.com",
            store_secret: "s3cr3t",
        }
    }

    #[test]
    fn test_load_complete() {
        let params = NodeParams::load(&raw()).unwrap();
        assert_eq!(params.device.device_id.as_str(), "esp32-pulsera-01");
        assert_eq!(params.wifi.ssid.as_str(), "gym-floor");
        assert_eq!(params.store.secret.as_str(), "s3cr3t");
    }

    fn assert_missing(values: RawParams<'static>, field: &'static str) {
        assert_eq!(
            NodeParams::load(&values).unwrap_err(),
            ConfigError::Missing(field)
        );
    }

    #[test]
    fn test_missing_fields_are_named() {
        assert_missing(
            RawParams {
                device_id: "",
                ..raw()
            },
            "DEVICE_ID",
        );
        assert_missing(
            RawParams {
                location: " ",
                ..raw()
            },
            "DEVICE_LOCATION",
        );
        assert_missing(
            RawParams {
                variant: "",
                ..raw()
            },
            "EXERCISE_VARIANT",
        );
        assert_missing(
            RawParams {
                wifi_ssid: "",
                ..raw()
            },
            "WIFI_SSID",
        );
        assert_missing(
            RawParams {
                wifi_password: "",
                ..raw()
            },
            "WIFI_PASSWORD",
        );
        assert_missing(
            RawParams {
                store_url: "",
                ..raw()
            },
            "STORE_URL",
        );
        assert_missing(
            RawParams {
                store_secret: "",
                ..raw()
            },
            "STORE_SECRET",
        );
    }

    #[test]
    fn test_first_failure_reported() {
        let values = RawParams::default();
        assert_eq!(
            NodeParams::load(&values).unwrap_err(),
            ConfigError::Missing("DEVICE_ID")
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::Missing("WIFI_SSID").to_string(),
            "missing configuration value: WIFI_SSID"
        );
    }
}
