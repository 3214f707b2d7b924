//! Exercise form classification
//!
//! Maps one [`Sample`] and the session's [`ExerciseVariant`] to a
//! [`StatusColor`]. The mapping is a pure function: no history, no
//! hysteresis, the same input always yields the same color.
//!
//! # Decision order (first match wins)
//!
//! 1. Orientation: `|gyro[orientation_axis]| >= orient_dps` → RED
//! 2. Tempo: any `|accel| > accel_max_g`, any `|gyro| > gyro_max_dps`, or all
//!    `|accel| < accel_min_g` → YELLOW
//! 3. Otherwise → GREEN
//!
//! Orientation strictly dominates tempo. "Too fast" and "too slow" cannot
//! both hold while `accel_max_g > accel_min_g`.

use serde::Serialize;

use crate::imu::{Axis, Sample};

/// Exercise being performed, fixed for the operating session.
///
/// The variant selects which gyroscope axis judges form: the forearm must not
/// rotate around that axis while the movement is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseVariant {
    /// Variant 1, palm-up curl. Orientation axis: gyro Y.
    Supination,
    /// Variant 2, neutral-grip curl. Orientation axis: gyro X.
    Hammer,
    /// Variant 3, palm-down curl. Orientation axis: gyro Z.
    Pronation,
    /// Any other configured code. Orientation axis: gyro Z.
    Other(i32),
}

impl ExerciseVariant {
    /// Map a configured numeric code to a variant.
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Supination,
            2 => Self::Hammer,
            3 => Self::Pronation,
            other => Self::Other(other),
        }
    }

    /// Numeric code as configured.
    pub const fn code(self) -> i32 {
        match self {
            Self::Supination => 1,
            Self::Hammer => 2,
            Self::Pronation => 3,
            Self::Other(code) => code,
        }
    }

    /// Gyroscope axis used for the orientation check.
    pub const fn orientation_axis(self) -> Axis {
        match self {
            Self::Supination => Axis::Y,
            Self::Hammer => Axis::X,
            Self::Pronation | Self::Other(_) => Axis::Z,
        }
    }
}

/// Fixed classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Below this on every accel axis the movement is too slow (g)
    pub accel_min_g: f32,
    /// Above this on any accel axis the movement is too fast (g)
    pub accel_max_g: f32,
    /// Above this on any gyro axis the movement is too fast (deg/s)
    pub gyro_max_dps: f32,
    /// At or above this on the orientation axis the form is wrong (deg/s)
    pub orient_dps: f32,
}

impl Thresholds {
    pub const DEFAULT: Self = Self {
        accel_min_g: 0.3,
        accel_max_g: 1.5,
        gyro_max_dps: 150.0,
        orient_dps: 25.0,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classification result, serialized with the labels the telemetry backend
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusColor {
    /// Orientation/form error
    #[serde(rename = "rojo")]
    Red,
    /// Tempo warning (too fast or too slow)
    #[serde(rename = "amarillo")]
    Yellow,
    /// Acceptable form and tempo
    #[serde(rename = "verde")]
    Green,
}

impl StatusColor {
    /// Telemetry label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "rojo",
            Self::Yellow => "amarillo",
            Self::Green => "verde",
        }
    }
}

/// Classify one sample.
pub fn classify(sample: &Sample, variant: ExerciseVariant, thresholds: &Thresholds) -> StatusColor {
    if !orientation_ok(sample, variant, thresholds) {
        return StatusColor::Red;
    }

    if too_fast(sample, thresholds) || too_slow(sample, thresholds) {
        return StatusColor::Yellow;
    }

    StatusColor::Green
}

fn orientation_ok(sample: &Sample, variant: ExerciseVariant, thresholds: &Thresholds) -> bool {
    let rate = sample.gyro.component(variant.orientation_axis());
    libm::fabsf(rate) < thresholds.orient_dps
}

fn too_fast(sample: &Sample, thresholds: &Thresholds) -> bool {
    sample
        .accel
        .magnitudes()
        .iter()
        .any(|&a| a > thresholds.accel_max_g)
        || sample
            .gyro
            .magnitudes()
            .iter()
            .any(|&g| g > thresholds.gyro_max_dps)
}

fn too_slow(sample: &Sample, thresholds: &Thresholds) -> bool {
    sample
        .accel
        .magnitudes()
        .iter()
        .all(|&a| a < thresholds.accel_min_g)
}
