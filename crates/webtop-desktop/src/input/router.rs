//! Drag controller state machine

use crate::error::{DesktopError, DesktopResult};
use crate::math::Vec2;
use crate::window::WindowId;
use super::{DragSession, DragState};

/// Owns the single system-wide drag session
///
/// `Idle -> Dragging` on [`begin`](Self::begin), `Dragging -> Idle` on
/// [`end`](Self::end). A second `begin` while dragging is rejected.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Get current drag state
    #[inline]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Start dragging `window_id`, capturing `pointer - window_origin`
    pub fn begin(&mut self, window_id: WindowId, pointer: Vec2, window_origin: Vec2) -> DesktopResult<&DragSession> {
        if let DragState::Dragging(active) = &self.state {
            return Err(DesktopError::DragInProgress(active.window_id.clone()));
        }
        self.state = DragState::Dragging(DragSession {
            window_id,
            offset: pointer - window_origin,
        });
        self.session().ok_or(DesktopError::NotDragging)
    }

    /// End the current drag, returning the finished session
    pub fn end(&mut self) -> DesktopResult<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => Ok(session),
            DragState::Idle => Err(DesktopError::NotDragging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_captures_offset() {
        let mut drag = DragController::new();
        assert!(!drag.is_dragging());

        let session = drag
            .begin("a".to_string(), Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0))
            .unwrap();
        assert_eq!(session.window_id, "a");
        assert_eq!(session.offset, Vec2::new(40.0, 40.0));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_second_begin_rejected() {
        let mut drag = DragController::new();
        drag.begin("a".to_string(), Vec2::ZERO, Vec2::ZERO).unwrap();

        let err = drag
            .begin("b".to_string(), Vec2::ZERO, Vec2::ZERO)
            .unwrap_err();
        assert_eq!(err, DesktopError::DragInProgress("a".to_string()));
        assert_eq!(drag.state().window_id(), Some("a"));
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut drag = DragController::new();
        drag.begin("a".to_string(), Vec2::ZERO, Vec2::ZERO).unwrap();

        let session = drag.end().unwrap();
        assert_eq!(session.window_id, "a");
        assert!(!drag.is_dragging());
        assert_eq!(drag.end(), Err(DesktopError::NotDragging));
    }
}
