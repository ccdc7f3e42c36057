//! Pointer events delivered by the input source

use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};

/// What the page resolved the event target to
///
/// The page answers the containment questions ("inside which window?",
/// "inside its close control?") from the DOM; the core only sees the answer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerTarget {
    /// Window containing the event target
    pub window_id: WindowId,
    /// Region of that window containing the target
    pub region: WindowRegion,
}

impl PointerTarget {
    /// Create a target
    pub fn new(window_id: impl Into<WindowId>, region: WindowRegion) -> Self {
        Self {
            window_id: window_id.into(),
            region,
        }
    }
}

/// Pointer event in viewport coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position
    pub position: Vec2,
    /// Resolved target, or `None` to hit-test geometrically
    pub target: Option<PointerTarget>,
}

impl PointerEvent {
    /// Event at a position with no resolved target
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            target: None,
        }
    }

    /// Attach a resolved target
    pub fn on(mut self, window_id: impl Into<WindowId>, region: WindowRegion) -> Self {
        self.target = Some(PointerTarget::new(window_id, region));
        self
    }
}
