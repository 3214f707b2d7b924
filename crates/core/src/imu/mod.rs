//! Inertial sensor data path: raw register frames and physical samples
//!
//! The sensor reports seven big-endian 16-bit words in one 14-byte burst.
//! [`frame`] turns those bytes into signed words; [`sample`] scales the words
//! into g, deg/s and °C. Both steps are pure and allocation-free so the
//! driver can reuse one buffer for every read.

pub mod frame;
pub mod sample;

pub use frame::{decode_word, RawFrame, FRAME_LEN};
pub use sample::{Axes3, Axis, Sample, SampleScale, TEMP_LSB_PER_C, TEMP_OFFSET_C};
