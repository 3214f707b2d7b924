//! Scripted wrist motion for the simulated sensor.
//!
//! A script is a list of phases, each holding a constant acceleration and
//! rotation rate for a number of samples. The script loops when it runs out.

use ezto_core::imu::{RawFrame, TEMP_LSB_PER_C, TEMP_OFFSET_C};

/// Accelerometer counts per g at ±2 g.
const ACCEL_LSB_PER_G: f32 = 16384.0;
/// Gyroscope counts per °/s at ±250 °/s.
const GYRO_LSB_PER_DPS: f32 = 131.0;

/// One segment of constant motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPhase {
    /// Number of burst reads this phase lasts.
    pub samples: u32,
    pub accel_g: [f32; 3],
    pub gyro_dps: [f32; 3],
    pub temperature_c: f32,
}

impl MotionPhase {
    pub const fn new(samples: u32, accel_g: [f32; 3], gyro_dps: [f32; 3]) -> Self {
        Self {
            samples,
            accel_g,
            gyro_dps,
            temperature_c: 25.0,
        }
    }

    /// Register frame a real sensor would produce for this phase.
    pub fn frame(&self) -> RawFrame {
        RawFrame::encode(
            self.accel_g.map(|g| to_counts(g * ACCEL_LSB_PER_G)),
            to_counts((self.temperature_c - TEMP_OFFSET_C) * TEMP_LSB_PER_C),
            self.gyro_dps.map(|dps| to_counts(dps * GYRO_LSB_PER_DPS)),
        )
    }
}

fn to_counts(value: f32) -> i16 {
    value.round().clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Looping sequence of motion phases.
#[derive(Debug, Clone)]
pub struct MotionScript {
    phases: Vec<MotionPhase>,
    phase: usize,
    remaining: u32,
}

impl MotionScript {
    /// Build a script. Empty scripts and zero-length phases are replaced by
    /// a single resting phase.
    pub fn new(phases: Vec<MotionPhase>) -> Self {
        let mut phases: Vec<MotionPhase> = phases.into_iter().filter(|p| p.samples > 0).collect();
        if phases.is_empty() {
            phases.push(Self::REST);
        }
        let remaining = phases[0].samples;
        Self {
            phases,
            phase: 0,
            remaining,
        }
    }

    /// Wrist held still, gravity on X.
    pub const REST: MotionPhase = MotionPhase::new(1, [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]);

    /// Clean repetitions with moderate rotation off the tracked axis.
    pub fn steady() -> Self {
        Self::new(vec![MotionPhase::new(
            10,
            [1.0, 0.4, 0.2],
            [5.0, 40.0, 10.0],
        )])
    }

    /// A full set: good reps, a rushed rep, a twisted rep and a pause.
    pub fn mixed() -> Self {
        Self::new(vec![
            MotionPhase::new(30, [1.0, 0.4, 0.2], [5.0, 40.0, 10.0]),
            MotionPhase::new(10, [1.8, 0.6, 0.3], [10.0, 170.0, 20.0]),
            MotionPhase::new(10, [1.0, 0.3, 0.2], [45.0, 30.0, 5.0]),
            MotionPhase::new(20, [0.1, 0.1, 0.2], [0.0, 0.0, 0.0]),
        ])
    }

    /// Named preset, as accepted on the command line.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "rest" => Some(Self::new(vec![Self::REST])),
            "steady" => Some(Self::steady()),
            "mixed" => Some(Self::mixed()),
            _ => None,
        }
    }

    /// Frame for the next sample, advancing the script.
    pub fn next_frame(&mut self) -> RawFrame {
        let frame = self.phases[self.phase].frame();
        self.remaining -= 1;
        if self.remaining == 0 {
            self.phase = (self.phase + 1) % self.phases.len();
            self.remaining = self.phases[self.phase].samples;
        }
        frame
    }
}

impl Default for MotionScript {
    fn default() -> Self {
        Self::steady()
    }
}
