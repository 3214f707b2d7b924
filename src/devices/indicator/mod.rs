//! Status indicator drivers

pub mod rgb;

pub use rgb::{Polarity, RgbIndicator};
