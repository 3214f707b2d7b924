//! Telemetry document model
//!
//! Serialized shape (field names are part of the backend contract):
//!
//! ```text
//! {
//!   "device_id": "...",
//!   "location": "...",
//!   "lecturas": {
//!     "accelerometer": {"x": f64, "y": f64, "z": f64},
//!     "gyroscope":     {"x": f64, "y": f64, "z": f64},
//!     "mpu_temp": f64,
//!     "led_color": "rojo" | "amarillo" | "verde",
//!     "led_state": {"r": bool, "g": bool, "b": bool},
//!     "mpu_connected": bool,
//!     "led_operational": bool,
//!     "wifi_rssi": i32,
//!     "free_heap": i32
//!   }
//! }
//! ```
//!
//! Readings are rounded before serialization: acceleration to 3 decimals,
//! angular rate to 2, temperature to 1.

use serde::Serialize;

use crate::classifier::StatusColor;
use crate::imu::Axes3;
use crate::indicator::IndicatorState;

use super::snapshot::TelemetrySnapshot;

/// Collection the node writes its readings to.
pub const TELEMETRY_COLLECTION: &str = "lecturas_iot";

/// Rounded three-axis value as stored in the document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AxesDoc {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AxesDoc {
    fn rounded(axes: &Axes3, factor: f64) -> Self {
        Self {
            x: round_to(axes.x, factor),
            y: round_to(axes.y, factor),
            z: round_to(axes.z, factor),
        }
    }
}

/// The `lecturas` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readings {
    pub accelerometer: AxesDoc,
    pub gyroscope: AxesDoc,
    pub mpu_temp: f64,
    pub led_color: StatusColor,
    pub led_state: IndicatorState,
    pub mpu_connected: bool,
    pub led_operational: bool,
    pub wifi_rssi: i32,
    pub free_heap: i32,
}

impl Readings {
    pub(crate) fn from_snapshot(snapshot: &TelemetrySnapshot<'_>) -> Self {
        let sample = snapshot.sample();
        let resources = snapshot.resources();
        Self {
            accelerometer: AxesDoc::rounded(&sample.accel, 1000.0),
            gyroscope: AxesDoc::rounded(&sample.gyro, 100.0),
            mpu_temp: round_to(sample.temperature_c, 10.0),
            led_color: snapshot.color(),
            led_state: snapshot.indicator(),
            // A snapshot only exists when the sensor produced a sample.
            mpu_connected: true,
            led_operational: snapshot.led_operational(),
            wifi_rssi: resources.link_quality,
            free_heap: resources.free_memory,
        }
    }
}

/// Complete telemetry document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryDocument<'a> {
    pub device_id: &'a str,
    pub location: &'a str,
    pub lecturas: Readings,
}

fn round_to(value: f32, factor: f64) -> f64 {
    libm::round(f64::from(value) * factor) / factor
}
