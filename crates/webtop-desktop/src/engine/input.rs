//! Delegated pointer handling and drag operations
//!
//! One handler serves every window: the target window is looked up from the
//! event (or hit-tested) instead of registering listeners per window.

use crate::error::{DesktopError, DesktopResult};
use crate::input::{InputResult, PointerEvent};
use crate::window::{WindowId, WindowRegion};
use super::WindowManager;

impl WindowManager {
    /// Resolve the open window and region under an event
    fn resolve_target(&self, event: &PointerEvent) -> Option<(WindowId, WindowRegion)> {
        match &event.target {
            Some(target) if self.windows.is_open(&target.window_id) => {
                Some((target.window_id.clone(), target.region))
            }
            Some(_) => None,
            None => self.windows.region_at(event.position, &self.config.frame),
        }
    }

    /// Handle pointer down
    ///
    /// Starts a drag on a header. Close controls never start a drag. Ignored
    /// while another drag is active.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> InputResult {
        if let Some(active) = self.input.state().window_id() {
            tracing::trace!(window = active, "pointer down ignored during drag");
            return InputResult::Unhandled;
        }

        let (window_id, region) = match self.resolve_target(event) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        if region == WindowRegion::CloseButton {
            return InputResult::Close { window_id };
        }
        if !region.is_drag_handle() {
            return InputResult::Unhandled;
        }

        match self.start_move_drag(&window_id, event) {
            Ok(()) => InputResult::Handled,
            Err(err) => {
                tracing::debug!(%err, "drag not started");
                InputResult::Unhandled
            }
        }
    }

    /// Start move drag
    fn start_move_drag(&mut self, id: &str, event: &PointerEvent) -> DesktopResult<()> {
        let origin = self
            .windows
            .get(id)
            .map(|w| w.position)
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))?;

        let offset = self.input.begin(id.to_string(), event.position, origin)?.offset;
        self.windows.bring_to_front(id)?;
        self.windows.set_dragging(id, true)?;
        tracing::debug!(window = id, dx = offset.x, dy = offset.y, "drag started");
        Ok(())
    }

    /// Handle pointer move
    ///
    /// While dragging, the window follows the pointer clamped to the current
    /// viewport, wherever the pointer is.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> InputResult {
        let (window_id, target) = match self.input.session() {
            Some(session) => (session.window_id.clone(), session.target_position(event.position)),
            None => return InputResult::Unhandled,
        };

        match self.windows.move_to(&window_id, target, &self.viewport) {
            Ok(pos) => {
                tracing::trace!(window = %window_id, x = pos.x, y = pos.y, "drag move");
                InputResult::Handled
            }
            Err(err) => {
                tracing::debug!(%err, "drag move dropped");
                InputResult::Unhandled
            }
        }
    }

    /// Handle pointer up, anywhere on the page
    pub fn handle_pointer_up(&mut self) -> InputResult {
        let session = match self.input.end() {
            Ok(session) => session,
            Err(_) => return InputResult::Unhandled,
        };

        if let Err(err) = self.windows.set_dragging(&session.window_id, false) {
            tracing::debug!(%err, "drag flag not cleared");
        }
        tracing::debug!(window = %session.window_id, "drag ended");
        InputResult::Handled
    }

    /// Handle click
    ///
    /// Any click inside an open window raises it; a click on its close
    /// control also starts the close sequence.
    pub fn handle_click(&mut self, event: &PointerEvent, now_ms: f64) -> InputResult {
        let (window_id, region) = match self.resolve_target(event) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        self.focus(&window_id);
        if region == WindowRegion::CloseButton {
            self.close(&window_id, now_ms);
        }
        InputResult::Handled
    }
}
