//! Window configuration for registration

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Configuration for registering a window
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Unique identifier (e.g. `"music-window"`)
    pub id: String,
    /// Window title
    pub title: String,
    /// Fixed size; the window manager never resizes windows
    pub size: Size,
    /// Base position the random open offset is added to
    pub position: Vec2,
}

impl WindowConfig {
    /// Create a config with an id, size and base position
    pub fn new(id: impl Into<String>, size: Size, position: Vec2) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            size,
            position,
        }
    }
}
