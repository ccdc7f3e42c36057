//! Viewport resize reconciliation

use super::WindowManager;

impl WindowManager {
    /// Resize the viewport and reclamp every open window
    ///
    /// Closed windows keep their stale geometry until reopened. Returns the
    /// number of windows that moved.
    pub fn resize(&mut self, width: f32, height: f32) -> usize {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            tracing::debug!(width, height, "resize ignored");
            return 0;
        }

        self.viewport.set_size(width, height);
        let moved = self.windows.reclamp_open(&self.viewport);
        tracing::debug!(width, height, moved, "viewport resized");
        moved
    }
}
