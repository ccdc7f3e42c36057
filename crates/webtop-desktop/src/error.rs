//! Error types for the window manager
//!
//! The public window manager API is best-effort: unknown windows and missing
//! targets degrade to no-ops. Internally each fallible step returns a
//! [`DesktopResult`] so callers that care (the `try_*` methods, configuration
//! loading) can see why nothing happened.

use crate::window::WindowId;

/// Errors that can occur in window manager operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not registered
    WindowNotFound(WindowId),

    /// Two window configs share the same ID
    DuplicateWindow(WindowId),

    /// A drag session already owns the pointer
    DragInProgress(WindowId),

    /// No drag session is active
    NotDragging,

    /// The stacking counter has no values left above the current one
    StackingExhausted,

    /// A timestamp was NaN or infinite
    InvalidTimestamp,

    /// Configuration value out of range
    InvalidConfig(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::DuplicateWindow(id) => write!(f, "duplicate window id: {}", id),
            Self::DragInProgress(id) => write!(f, "drag already in progress on window: {}", id),
            Self::NotDragging => write!(f, "no drag in progress"),
            Self::StackingExhausted => write!(f, "stacking order exhausted"),
            Self::InvalidTimestamp => write!(f, "timestamp must be finite"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for window manager operations
pub type DesktopResult<T> = Result<T, DesktopError>;
