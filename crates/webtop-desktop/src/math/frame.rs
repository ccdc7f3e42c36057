//! Frame style constants

use serde::{Deserialize, Serialize};

/// Window chrome metrics used for geometric hit testing
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameStyle {
    /// Height of the draggable header strip
    pub title_bar_height: f32,
    /// Side length of the square close control
    pub button_size: f32,
    /// Gap between the close control and the right edge
    pub button_margin: f32,
}

/// Default frame style matching the desktop stylesheet
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    button_size: 16.0,
    button_margin: 8.0,
};

impl Default for FrameStyle {
    fn default() -> Self {
        FRAME_STYLE
    }
}

impl FrameStyle {
    /// Check that every metric is finite and non-negative
    pub fn is_valid(&self) -> bool {
        [self.title_bar_height, self.button_size, self.button_margin]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}
