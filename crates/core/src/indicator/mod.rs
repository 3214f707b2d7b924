//! Indicator channel state
//!
//! Fixed 1:1 mapping from a [`StatusColor`] to the three RGB channels:
//!
//! | Color  | r   | g   | b   |
//! |--------|-----|-----|-----|
//! | RED    | on  | off | off |
//! | YELLOW | on  | on  | off |
//! | GREEN  | off | on  | off |

use serde::Serialize;

use crate::classifier::StatusColor;

/// Logical on/off state of the three indicator channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IndicatorState {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl IndicatorState {
    /// All channels off.
    pub const OFF: Self = Self::new(false, false, false);

    pub const fn new(r: bool, g: bool, b: bool) -> Self {
        Self { r, g, b }
    }

    /// Channel triple for a classification result.
    pub const fn for_color(color: StatusColor) -> Self {
        match color {
            StatusColor::Red => Self::new(true, false, false),
            StatusColor::Yellow => Self::new(true, true, false),
            StatusColor::Green => Self::new(false, true, false),
        }
    }
}

impl From<StatusColor> for IndicatorState {
    fn from(color: StatusColor) -> Self {
        Self::for_color(color)
    }
}
