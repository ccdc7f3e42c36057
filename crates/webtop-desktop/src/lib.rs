//! Window manager for the Webtop browser desktop
//!
//! This crate provides the core of the desktop page:
//! - Window registry (fixed set of panels, open/closed visibility)
//! - Stacking order (bring to front on open, drag and click)
//! - Drag state machine with viewport clamping
//! - Two-phase open/close transitions with lifecycle hooks
//! - Resize reconciliation
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`, `FrameStyle`)
//! - [`window`]: Window registry, stacking counter and hit testing
//! - [`input`]: Pointer events and the drag controller
//! - [`transition`]: Transition phases and the timer queue
//! - [`hooks`]: Open/close callbacks for collaborators
//!
//! ## Example
//!
//! ```rust
//! use webtop_desktop::{DesktopConfig, FixedOffset, PointerEvent, Size, Vec2, WindowConfig, WindowManager, WindowRegion};
//!
//! let mut wm = WindowManager::new(
//!     [WindowConfig::new("music-window", Size::new(300.0, 200.0), Vec2::new(10.0, 10.0))],
//!     DesktopConfig::default(),
//! )
//! .unwrap()
//! .with_offsets(FixedOffset(0.0));
//! wm.init(1024.0, 768.0);
//!
//! wm.launch("music", 0.0);
//! wm.handle_pointer_down(&PointerEvent::at(50.0, 20.0).on("music-window", WindowRegion::Header));
//! wm.handle_pointer_move(&PointerEvent::at(2000.0, 2000.0));
//! wm.handle_pointer_up();
//!
//! assert_eq!(wm.windows().get("music-window").unwrap().position, Vec2::new(724.0, 568.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Deferred steps take an injected `now_ms`
//! 3. **No Globals**: All mutable state is owned by one `WindowManager`
//! 4. **Best Effort**: Unknown windows and stray events are no-ops, never panics

pub mod hooks;
pub mod input;
pub mod math;
pub mod transition;
pub mod window;

mod config;
mod engine;
mod error;
mod offset;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{DesktopConfig, CLOSE_DELAY_MS, MAX_Z_BASE, OPEN_JITTER_PX};
pub use engine::{launcher_window_id, WindowManager, WindowView};
pub use error::{DesktopError, DesktopResult};
pub use hooks::LifecycleHooks;
pub use input::{DragController, DragSession, DragState, InputResult, PointerEvent, PointerTarget};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use offset::{FixedOffset, OffsetSource, RandomOffsets};
pub use transition::{TimerQueue, TransitionPhase};
pub use viewport::{clamp_position, Viewport};
pub use window::{Visibility, Window, WindowConfig, WindowId, WindowRegion, WindowRegistry, ZOrder};
