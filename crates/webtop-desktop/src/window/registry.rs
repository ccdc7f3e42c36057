//! Window registry for visibility, stacking and hit testing

use std::collections::HashMap;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{FrameStyle, Vec2};
use crate::viewport::Viewport;
use super::{Visibility, Window, WindowConfig, WindowId, WindowRegion, ZOrder};

/// Fixed set of windows known at startup
///
/// Windows are never added or removed after construction; closing only hides
/// them. Registration order is preserved for iteration.
pub struct WindowRegistry {
    /// Windows in registration order
    windows: Vec<Window>,
    /// Index into `windows` by ID
    index: HashMap<WindowId, usize>,
    /// Stacking counter
    stacking: ZOrder,
}

impl WindowRegistry {
    /// Register the full window set
    pub fn new(configs: impl IntoIterator<Item = WindowConfig>, z_base: u64) -> DesktopResult<Self> {
        let mut windows = Vec::new();
        let mut index = HashMap::new();

        for config in configs {
            if !config.size.is_valid() {
                return Err(DesktopError::InvalidConfig(format!(
                    "window {} has an invalid size",
                    config.id
                )));
            }
            if index.contains_key(&config.id) {
                return Err(DesktopError::DuplicateWindow(config.id));
            }
            index.insert(config.id.clone(), windows.len());
            windows.push(Window::from_config(config));
        }

        Ok(Self {
            windows,
            index,
            stacking: ZOrder::new(z_base),
        })
    }

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.index.get(id).map(|&i| &self.windows[i])
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        match self.index.get(id) {
            Some(&i) => self.windows.get_mut(i),
            None => None,
        }
    }

    fn require_mut(&mut self, id: &str) -> DesktopResult<&mut Window> {
        self.get_mut(id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))
    }

    /// Whether `id` is registered
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Whether `id` is registered and open
    pub fn is_open(&self, id: &str) -> bool {
        self.get(id).is_some_and(Window::is_open)
    }

    /// Raise a window above every other, returning its new stacking order
    pub fn bring_to_front(&mut self, id: &str) -> DesktopResult<u64> {
        let i = *self
            .index
            .get(id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))?;
        let z = self.stacking.next().ok_or(DesktopError::StackingExhausted)?;
        self.windows[i].z_order = z;
        Ok(z)
    }

    /// Highest stacking order handed out so far
    #[inline]
    pub fn top_z(&self) -> u64 {
        self.stacking.current()
    }

    /// Show a closed window at `base_position + offset`, clamped
    ///
    /// Returns `Ok(false)` without touching position when the window was
    /// already open. The caller raises the window.
    pub fn show(&mut self, id: &str, offset: Vec2, viewport: &Viewport) -> DesktopResult<bool> {
        let window = self.require_mut(id)?;
        if window.is_open() {
            return Ok(false);
        }
        window.visibility = Visibility::Open;
        window.position = viewport.clamp(window.base_position + offset, window.size);
        Ok(true)
    }

    /// Hide an open window, returns `Ok(false)` if it was already closed
    pub fn hide(&mut self, id: &str) -> DesktopResult<bool> {
        let window = self.require_mut(id)?;
        if !window.is_open() {
            return Ok(false);
        }
        window.visibility = Visibility::Closed;
        window.dragging = false;
        Ok(true)
    }

    /// Move a window, clamped to the viewport
    pub fn move_to(&mut self, id: &str, position: Vec2, viewport: &Viewport) -> DesktopResult<Vec2> {
        let window = self.require_mut(id)?;
        window.position = viewport.clamp(position, window.size);
        Ok(window.position)
    }

    /// Set or clear the dragging flag
    pub fn set_dragging(&mut self, id: &str, dragging: bool) -> DesktopResult<()> {
        self.require_mut(id)?.dragging = dragging;
        Ok(())
    }

    /// Reclamp every open window against `viewport`, returns how many moved
    pub fn reclamp_open(&mut self, viewport: &Viewport) -> usize {
        let mut moved = 0;
        for window in self.windows.iter_mut().filter(|w| w.is_open()) {
            let clamped = viewport.clamp(window.position, window.size);
            if clamped != window.position {
                window.position = clamped;
                moved += 1;
            }
        }
        moved
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Get the currently frontmost open window
    pub fn focused(&self) -> Option<&Window> {
        self.windows
            .iter()
            .filter(|w| w.is_open())
            .max_by_key(|w| w.z_order)
    }

    /// Find which region of which open window is at a position (topmost first)
    pub fn region_at(&self, pos: Vec2, frame: &FrameStyle) -> Option<(WindowId, WindowRegion)> {
        let mut windows: Vec<&Window> = self.windows.iter().filter(|w| w.is_open()).collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_order));

        windows
            .into_iter()
            .find(|w| w.rect().contains(pos))
            .map(|w| (w.id.clone(), hit_test_window(w, pos, frame)))
    }

    /// Get the number of registered windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

/// Classify a point already known to be inside `window`
fn hit_test_window(window: &Window, pos: Vec2, frame: &FrameStyle) -> WindowRegion {
    if window.close_button_rect(frame).contains(pos) {
        WindowRegion::CloseButton
    } else if window.header_rect(frame).contains(pos) {
        WindowRegion::Header
    } else {
        WindowRegion::Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, FRAME_STYLE};

    fn registry() -> WindowRegistry {
        WindowRegistry::new(
            [
                WindowConfig::new("a", Size::new(300.0, 200.0), Vec2::new(10.0, 10.0)),
                WindowConfig::new("b", Size::new(300.0, 200.0), Vec2::new(100.0, 100.0)),
            ],
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let reg = registry();
        assert_eq!(reg.count(), 2);
        assert!(reg.contains("a"));
        assert!(!reg.contains("c"));
        assert!(!reg.is_open("a"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = WindowRegistry::new(
            [
                WindowConfig::new("a", Size::new(1.0, 1.0), Vec2::ZERO),
                WindowConfig::new("a", Size::new(1.0, 1.0), Vec2::ZERO),
            ],
            0,
        );
        assert_eq!(result.err(), Some(DesktopError::DuplicateWindow("a".to_string())));
    }

    #[test]
    fn test_invalid_size_rejected() {
        let result = WindowRegistry::new(
            [WindowConfig::new("a", Size::new(-1.0, 1.0), Vec2::ZERO)],
            0,
        );
        assert!(matches!(result, Err(DesktopError::InvalidConfig(_))));
    }

    #[test]
    fn test_bring_to_front() {
        let mut reg = registry();
        assert_eq!(reg.bring_to_front("a"), Ok(1));
        assert_eq!(reg.bring_to_front("b"), Ok(2));
        assert_eq!(reg.bring_to_front("a"), Ok(3));
        assert_eq!(reg.top_z(), 3);
        assert!(reg.bring_to_front("missing").is_err());
        assert_eq!(reg.top_z(), 3);
    }

    #[test]
    fn test_bring_to_front_at_counter_limit() {
        let mut reg = WindowRegistry::new(
            [WindowConfig::new("a", Size::new(1.0, 1.0), Vec2::ZERO)],
            u64::MAX,
        )
        .unwrap();
        assert_eq!(reg.bring_to_front("a"), Err(DesktopError::StackingExhausted));
        assert_eq!(reg.get("a").unwrap().z_order, 0);
        assert_eq!(reg.top_z(), u64::MAX);
    }

    #[test]
    fn test_show_applies_offset_and_clamps() {
        let mut reg = registry();
        let viewport = Viewport::new(1024.0, 768.0);

        assert_eq!(reg.show("a", Vec2::splat(20.0), &viewport), Ok(true));
        let a = reg.get("a").unwrap();
        assert!(a.is_open());
        assert_eq!(a.position, Vec2::new(30.0, 30.0));

        let small = Viewport::new(320.0, 220.0);
        assert_eq!(reg.show("b", Vec2::splat(40.0), &small), Ok(true));
        assert_eq!(reg.get("b").unwrap().position, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_show_already_open_keeps_position() {
        let mut reg = registry();
        let viewport = Viewport::new(1024.0, 768.0);
        reg.show("a", Vec2::ZERO, &viewport).unwrap();
        reg.move_to("a", Vec2::new(500.0, 400.0), &viewport).unwrap();

        assert_eq!(reg.show("a", Vec2::splat(30.0), &viewport), Ok(false));
        assert_eq!(reg.get("a").unwrap().position, Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut reg = registry();
        let viewport = Viewport::new(1024.0, 768.0);
        reg.show("a", Vec2::ZERO, &viewport).unwrap();

        assert_eq!(reg.hide("a"), Ok(true));
        let pos = reg.get("a").unwrap().position;
        assert_eq!(reg.hide("a"), Ok(false));
        assert_eq!(reg.get("a").unwrap().position, pos);
        assert!(!reg.is_open("a"));
    }

    #[test]
    fn test_reclamp_skips_closed() {
        let mut reg = registry();
        let viewport = Viewport::new(1024.0, 768.0);
        reg.show("a", Vec2::ZERO, &viewport).unwrap();
        reg.move_to("a", Vec2::new(724.0, 568.0), &viewport).unwrap();
        reg.get_mut("b").unwrap().position = Vec2::new(900.0, 900.0);

        let moved = reg.reclamp_open(&Viewport::new(600.0, 500.0));
        assert_eq!(moved, 1);
        assert_eq!(reg.get("a").unwrap().position, Vec2::new(300.0, 300.0));
        assert_eq!(reg.get("b").unwrap().position, Vec2::new(900.0, 900.0));
    }

    #[test]
    fn test_region_at_prefers_topmost() {
        let mut reg = registry();
        let viewport = Viewport::new(1024.0, 768.0);
        reg.show("a", Vec2::ZERO, &viewport).unwrap();
        reg.bring_to_front("a").unwrap();
        reg.show("b", Vec2::ZERO, &viewport).unwrap();
        reg.bring_to_front("b").unwrap();

        // Overlap of a (10..310) and b (100..400)
        let (id, region) = reg.region_at(Vec2::new(150.0, 150.0), &FRAME_STYLE).unwrap();
        assert_eq!(id, "b");
        assert_eq!(region, WindowRegion::Body);

        reg.bring_to_front("a").unwrap();
        let (id, _) = reg.region_at(Vec2::new(150.0, 150.0), &FRAME_STYLE).unwrap();
        assert_eq!(id, "a");
    }

    #[test]
    fn test_region_at_header_and_close() {
        let mut reg = registry();
        let viewport = Viewport::new(1024.0, 768.0);
        reg.show("a", Vec2::ZERO, &viewport).unwrap();

        let (_, region) = reg.region_at(Vec2::new(50.0, 20.0), &FRAME_STYLE).unwrap();
        assert_eq!(region, WindowRegion::Header);

        let close = reg.get("a").unwrap().close_button_rect(&FRAME_STYLE);
        let (_, region) = reg
            .region_at(Vec2::new(close.x + 1.0, close.y + 1.0), &FRAME_STYLE)
            .unwrap();
        assert_eq!(region, WindowRegion::CloseButton);
    }

    #[test]
    fn test_region_at_ignores_closed_windows() {
        let reg = registry();
        assert!(reg.region_at(Vec2::new(50.0, 50.0), &FRAME_STYLE).is_none());
    }

    #[test]
    fn test_focused_is_topmost_open() {
        let mut reg = registry();
        let viewport = Viewport::new(1024.0, 768.0);
        assert!(reg.focused().is_none());

        reg.show("a", Vec2::ZERO, &viewport).unwrap();
        reg.bring_to_front("a").unwrap();
        reg.bring_to_front("b").unwrap();
        // b is raised but closed
        assert_eq!(reg.focused().map(|w| w.id.as_str()), Some("a"));
    }
}
