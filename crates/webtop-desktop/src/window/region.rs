//! Window region for hit testing

use serde::{Deserialize, Serialize};

/// Region of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRegion {
    /// Header strip (drag handle)
    Header,
    /// Close control inside the header
    CloseButton,
    /// Everything below the header
    Body,
}

impl WindowRegion {
    /// Whether a pointer-down here starts a drag
    #[inline]
    pub fn is_drag_handle(&self) -> bool {
        matches!(self, WindowRegion::Header)
    }

    /// Parse the region name sent by the page
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "header" => Some(WindowRegion::Header),
            "close" | "close-btn" => Some(WindowRegion::CloseButton),
            "body" | "content" => Some(WindowRegion::Body),
            _ => None,
        }
    }
}
