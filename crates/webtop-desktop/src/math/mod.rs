//! Geometry primitives
//!
//! Positions and sizes are in viewport (CSS pixel) coordinates with the
//! origin at the top-left corner.

mod frame;
mod rect;
mod size;
mod vec2;

pub use frame::{FrameStyle, FRAME_STYLE};
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
