//! Input routing module
//!
//! Provides the pointer event types and the drag state machine.

mod router;
mod drag;
mod event;
mod result;

pub use router::DragController;
pub use drag::{DragSession, DragState};
pub use event::{PointerEvent, PointerTarget};
pub use result::InputResult;
