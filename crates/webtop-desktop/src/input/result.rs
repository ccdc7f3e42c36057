//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Pointer-down landed on a close control; the page should not start a drag
    Close {
        /// Window whose close control was hit
        window_id: WindowId,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Close { .. })
    }
}
