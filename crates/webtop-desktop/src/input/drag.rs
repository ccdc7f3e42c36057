//! Drag session state

use crate::math::Vec2;
use crate::window::WindowId;

/// In-progress window drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Window being dragged
    pub window_id: WindowId,
    /// Offset from window origin to cursor at drag start
    pub offset: Vec2,
}

impl DragSession {
    /// Unclamped window position for a pointer position
    #[inline]
    pub fn target_position(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}

/// Drag state machine state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// Exactly one window follows the pointer
    Dragging(DragSession),
}

impl DragState {
    /// Check if a drag is active
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Get the window ID if dragging
    pub fn window_id(&self) -> Option<&str> {
        match self {
            DragState::Dragging(session) => Some(&session.window_id),
            DragState::Idle => None,
        }
    }
}
