//! Viewport bounds and position clamping

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Clamp a window's top-left corner so the window stays inside the viewport
///
/// `x' = max(0, min(x, viewport.width - size.width))`, same for y. A window
/// larger than the viewport ends up anchored at the origin and overflows.
#[inline]
pub fn clamp_position(position: Vec2, size: Size, viewport: Size) -> Vec2 {
    Vec2::new(
        position.x.min(viewport.width - size.width).max(0.0),
        position.y.min(viewport.height - size.height).max(0.0),
    )
}

/// Visible rendering surface used as the clamping bounds
///
/// Always the browser viewport, never a window's own container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Surface size in pixels
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a viewport with the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Update the surface size, returns false when the size was unchanged
    pub fn set_size(&mut self, width: f32, height: f32) -> bool {
        let size = Size::new(width, height);
        if size == self.size {
            return false;
        }
        self.size = size;
        true
    }

    /// Clamp a window position against this viewport
    #[inline]
    pub fn clamp(&self, position: Vec2, size: Size) -> Vec2 {
        clamp_position(position, size, self.size)
    }
}
