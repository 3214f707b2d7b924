//! Document key derivation
//!
//! Key format: `YYYY-MM-DDTHH:MM:SSZ_<device_id>`.
//!
//! The timestamp is truncated to whole seconds, so two snapshots from the same
//! device within one second map to the same key and the later upsert replaces
//! the earlier one (last write wins).

use core::fmt::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use heapless::String;

/// Length of the `YYYY-MM-DDTHH:MM:SSZ` prefix.
pub const TIMESTAMP_LEN: usize = 20;

/// Maximum device identifier length accepted in a key.
pub const MAX_DEVICE_ID_LEN: usize = 32;

/// Capacity of a document key: timestamp, separator, device id.
pub const DOCUMENT_KEY_CAPACITY: usize = TIMESTAMP_LEN + 1 + MAX_DEVICE_ID_LEN;

/// Second-resolution ISO 8601 UTC timestamp.
pub type Timestamp = String<TIMESTAMP_LEN>;

/// Store key for one telemetry document.
pub type DocumentKey = String<DOCUMENT_KEY_CAPACITY>;

/// Key derivation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Timestamp outside the representable calendar range
    TimestampOutOfRange,
    /// Device identifier longer than [`MAX_DEVICE_ID_LEN`]
    DeviceIdTooLong,
}

impl core::fmt::Display for KeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyError::TimestampOutOfRange => write!(f, "timestamp out of range"),
            KeyError::DeviceIdTooLong => write!(f, "device id too long"),
        }
    }
}

/// Format Unix milliseconds as `YYYY-MM-DDTHH:MM:SSZ`, dropping sub-second
/// precision.
pub fn format_timestamp(unix_ms: u64) -> Result<Timestamp, KeyError> {
    let secs = i64::try_from(unix_ms / 1000).map_err(|_| KeyError::TimestampOutOfRange)?;
    let time = DateTime::<Utc>::from_timestamp(secs, 0).ok_or(KeyError::TimestampOutOfRange)?;

    // Four-digit years only; anything wider would not fit the fixed layout.
    if time.year() > 9999 {
        return Err(KeyError::TimestampOutOfRange);
    }

    let mut out = Timestamp::new();
    write!(
        out,
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    )
    .map_err(|_| KeyError::TimestampOutOfRange)?;
    Ok(out)
}

/// Derive the document key for a snapshot taken at `unix_ms`.
pub fn document_key(unix_ms: u64, device_id: &str) -> Result<DocumentKey, KeyError> {
    if device_id.len() > MAX_DEVICE_ID_LEN {
        return Err(KeyError::DeviceIdTooLong);
    }

    let timestamp = format_timestamp(unix_ms)?;
    let mut key = DocumentKey::new();
    // Capacity covers the longest accepted id
    key.push_str(&timestamp).map_err(|_| KeyError::DeviceIdTooLong)?;
    key.push('_').map_err(|_| KeyError::DeviceIdTooLong)?;
    key.push_str(device_id).map_err(|_| KeyError::DeviceIdTooLong)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-05-17T08:30:45Z
    const T0_MS: u64 = 1_715_934_645_000;

    #[test]
    fn epoch_formats() {
        assert_eq!(format_timestamp(0).unwrap().as_str(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn key_layout() {
        let key = document_key(T0_MS, "esp32-pulsera-01").unwrap();
        assert_eq!(key.as_str(), "2024-05-17T08:30:45Z_esp32-pulsera-01");
    }

    #[test]
    fn sub_second_timestamps_collide() {
        let early = document_key(T0_MS + 1, "dev").unwrap();
        let late = document_key(T0_MS + 999, "dev").unwrap();
        assert_eq!(early, late);

        let next = document_key(T0_MS + 1000, "dev").unwrap();
        assert_ne!(early, next);
        assert_eq!(next.as_str(), "2024-05-17T08:30:46Z_dev");
    }

    #[test]
    fn different_devices_never_collide() {
        assert_ne!(
            document_key(T0_MS, "left-wrist").unwrap(),
            document_key(T0_MS, "right-wrist").unwrap()
        );
    }

    #[test]
    fn leap_day_and_year_end() {
        // 2024-02-29T23:59:59Z
        assert_eq!(
            format_timestamp(1_709_251_199_000).unwrap().as_str(),
            "2024-02-29T23:59:59Z"
        );
        // 1999-12-31T23:59:59Z
        assert_eq!(
            format_timestamp(946_684_799_000).unwrap().as_str(),
            "1999-12-31T23:59:59Z"
        );
    }

    #[test]
    fn rejects_oversized_inputs() {
        let long_id = "x".repeat(MAX_DEVICE_ID_LEN + 1);
        assert_eq!(document_key(T0_MS, &long_id), Err(KeyError::DeviceIdTooLong));

        let max_id = "x".repeat(MAX_DEVICE_ID_LEN);
        assert_eq!(document_key(T0_MS, &max_id).unwrap().len(), DOCUMENT_KEY_CAPACITY);

        assert_eq!(format_timestamp(u64::MAX), Err(KeyError::TimestampOutOfRange));
    }
}
