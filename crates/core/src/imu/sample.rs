//! Physical-unit samples
//!
//! Scale factors depend on the configured full-scale ranges. The defaults
//! ([`SampleScale::DEFAULT`]) match ±2 g and ±250 deg/s:
//!
//! - accel: counts / 16384.0 → g
//! - gyro: counts / 131.0 → deg/s
//! - temperature: counts / 340.0 + 36.53 → °C (range independent)

use super::frame::RawFrame;

/// Temperature sensitivity (LSB/°C)
pub const TEMP_LSB_PER_C: f32 = 340.0;

/// Temperature offset (°C at 0 LSB)
pub const TEMP_OFFSET_C: f32 = 36.53;

/// Sensor axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Three-axis reading in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Axes3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Value of a single axis.
    pub fn component(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Axis magnitudes as an array, in x, y, z order.
    pub fn magnitudes(&self) -> [f32; 3] {
        [libm::fabsf(self.x), libm::fabsf(self.y), libm::fabsf(self.z)]
    }

    fn from_counts(raw: [i16; 3], lsb_per_unit: f32) -> Self {
        Self {
            x: f32::from(raw[0]) / lsb_per_unit,
            y: f32::from(raw[1]) / lsb_per_unit,
            z: f32::from(raw[2]) / lsb_per_unit,
        }
    }
}

/// Counts-per-unit for the configured full-scale ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleScale {
    /// Accelerometer sensitivity (LSB/g)
    pub accel_lsb_per_g: f32,
    /// Gyroscope sensitivity (LSB/(deg/s))
    pub gyro_lsb_per_dps: f32,
}

impl SampleScale {
    /// ±2 g, ±250 deg/s
    pub const DEFAULT: Self = Self {
        accel_lsb_per_g: 16384.0,
        gyro_lsb_per_dps: 131.0,
    };
}

impl Default for SampleScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One accelerometer/gyroscope/temperature reading in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Acceleration in g
    pub accel: Axes3,
    /// Angular rate in deg/s
    pub gyro: Axes3,
    /// Die temperature in °C
    pub temperature_c: f32,
}

impl Sample {
    /// Convert exactly one raw frame. Pure and deterministic.
    pub fn from_frame(frame: &RawFrame, scale: &SampleScale) -> Self {
        Self {
            accel: Axes3::from_counts(frame.accel_raw(), scale.accel_lsb_per_g),
            gyro: Axes3::from_counts(frame.gyro_raw(), scale.gyro_lsb_per_dps),
            temperature_c: temperature_from_counts(frame.temperature_raw()),
        }
    }
}

/// Convert temperature counts to °C.
pub fn temperature_from_counts(raw: i16) -> f32 {
    f32::from(raw) / TEMP_LSB_PER_C + TEMP_OFFSET_C
}
