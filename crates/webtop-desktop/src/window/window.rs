//! Window struct and visibility

use serde::{Deserialize, Serialize};
use crate::math::{FrameStyle, Rect, Size, Vec2};
use crate::transition::TransitionPhase;
use super::{WindowConfig, WindowId};

/// Whether a window is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

/// A draggable, stackable panel on the desktop
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Top-left corner in viewport coordinates
    pub position: Vec2,
    /// Baseline the open offset is applied to
    pub base_position: Vec2,
    /// Fixed size
    pub size: Size,
    /// Open or closed
    pub visibility: Visibility,
    /// Stacking order (higher = on top, 0 = never raised)
    pub z_order: u64,
    /// Set while this window is the drag target
    pub dragging: bool,
    /// Open/close animation phase
    pub phase: TransitionPhase,
}

impl Window {
    /// Build a closed window from its registration config
    pub fn from_config(config: WindowConfig) -> Self {
        Self {
            id: config.id,
            title: config.title,
            position: config.position,
            base_position: config.position,
            size: config.size,
            visibility: Visibility::Closed,
            z_order: 0,
            dragging: false,
            phase: TransitionPhase::Idle,
        }
    }

    /// Whether the window is open
    #[inline]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the header (drag handle) rectangle
    pub fn header_rect(&self, frame: &FrameStyle) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            frame.title_bar_height.min(self.size.height),
        )
    }

    /// Get the close button rectangle, vertically centred in the header
    pub fn close_button_rect(&self, frame: &FrameStyle) -> Rect {
        let x = self.position.x + self.size.width - frame.button_margin - frame.button_size;
        let y = self.position.y + (frame.title_bar_height - frame.button_size) / 2.0;
        Rect::new(x, y, frame.button_size, frame.button_size)
    }
}
