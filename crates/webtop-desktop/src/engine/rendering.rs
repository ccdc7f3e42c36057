//! Render state exported to the page

use serde::Serialize;
use crate::math::{Size, Vec2};
use crate::transition::TransitionPhase;
use crate::window::{Visibility, Window, WindowId};
use super::WindowManager;

/// Everything the renderer needs to draw one window
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView {
    /// Window identifier
    pub id: WindowId,
    /// Title shown in the header
    pub title: String,
    /// Top-left corner in viewport coordinates
    pub position: Vec2,
    /// Fixed window size
    pub size: Size,
    /// Open or closed
    pub visibility: Visibility,
    /// Stacking order, used directly as CSS z-index
    pub z_order: u64,
    /// Whether the window is the current drag target
    pub dragging: bool,
    /// Whether this is the frontmost open window
    pub focused: bool,
    /// Current open/close transition phase
    pub phase: TransitionPhase,
    /// Target opacity for the current phase
    pub opacity: f32,
    /// Target scale for the current phase
    pub scale: f32,
}

impl WindowView {
    fn from_window(w: &Window, focused: bool) -> Self {
        Self {
            id: w.id.clone(),
            title: w.title.clone(),
            position: w.position,
            size: w.size,
            visibility: w.visibility,
            z_order: w.z_order,
            dragging: w.dragging,
            focused,
            phase: w.phase,
            opacity: w.phase.opacity(),
            scale: w.phase.scale(),
        }
    }
}

impl WindowManager {
    /// Render state for every window, back to front
    pub fn views(&self) -> Vec<WindowView> {
        let focused_id = self.windows.focused().map(|w| w.id.as_str());

        self.windows
            .windows_by_z()
            .into_iter()
            .map(|w| WindowView::from_window(w, focused_id == Some(w.id.as_str())))
            .collect()
    }

    /// Render state for open windows only, back to front
    pub fn visible_views(&self) -> Vec<WindowView> {
        self.views()
            .into_iter()
            .filter(|v| v.visibility == Visibility::Open)
            .collect()
    }

    /// Render state serialized as JSON
    pub fn views_json(&self) -> String {
        serde_json::to_string(&self.views()).unwrap_or_else(|err| {
            tracing::debug!(%err, "views not serialized");
            "[]".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::test_support::manager;
    use crate::transition::TransitionPhase;
    use crate::window::Visibility;

    #[test]
    fn test_views_back_to_front() {
        let mut wm = manager();
        wm.open("b", 0.0);
        wm.open("a", 0.0);

        let views = wm.views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, "b");
        assert_eq!(views[1].id, "a");
        assert!(views[1].focused);
        assert!(!views[0].focused);
    }

    #[test]
    fn test_visible_views_skip_closed() {
        let mut wm = manager();
        wm.open("a", 0.0);

        let views = wm.visible_views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].visibility, Visibility::Open);
    }

    #[test]
    fn test_view_reflects_phase() {
        let mut wm = manager();
        wm.open("a", 0.0);
        let v = &wm.visible_views()[0];
        assert_eq!(v.phase, TransitionPhase::Entering);
        assert!((v.opacity - 0.0).abs() < 0.001);

        wm.tick(0.0);
        let v = &wm.visible_views()[0];
        assert_eq!(v.phase, TransitionPhase::Entered);
        assert!((v.opacity - 1.0).abs() < 0.001);
        assert!((v.scale - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_views_json() {
        let mut wm = manager();
        wm.open("a", 0.0);

        let parsed: serde_json::Value = serde_json::from_str(&wm.views_json()).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        let a = arr.iter().find(|v| v["id"] == "a").unwrap();
        assert_eq!(a["visibility"], "open");
        assert_eq!(a["z_order"], 1);
        assert_eq!(a["phase"], "entering");
        assert_eq!(a["position"]["x"], 10.0);
    }
}
