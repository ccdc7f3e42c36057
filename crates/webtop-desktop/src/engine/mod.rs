//! Window manager coordinating all desktop components
//!
//! This module is split into focused submodules:
//! - `lifecycle`: Open/close sequences and timer ticks
//! - `input`: Pointer event handling and drag operations
//! - `resize`: Viewport resize reconciliation
//! - `rendering`: Render state exported to the page

mod lifecycle;
mod input;
mod resize;
mod rendering;

use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::hooks::LifecycleHooks;
use crate::input::DragController;
use crate::offset::{OffsetSource, RandomOffsets};
use crate::transition::{TimerQueue, TransitionTask};
use crate::viewport::Viewport;
use crate::window::{WindowConfig, WindowRegistry};

pub use lifecycle::launcher_window_id;
pub use rendering::WindowView;

/// Window manager owning all mutable desktop state
///
/// Everything that would otherwise be global (stacking counter, drag
/// session, registry, pending transitions) lives here. All mutation goes
/// through `&mut self` on the single UI thread.
pub struct WindowManager {
    /// Tunables
    pub(crate) config: DesktopConfig,
    /// Clamping bounds
    pub(crate) viewport: Viewport,
    /// Registered windows
    pub(crate) windows: WindowRegistry,
    /// Drag state machine
    pub(crate) input: DragController,
    /// Deferred transition steps
    pub(crate) timers: TimerQueue<TransitionTask>,
    /// Open/close callbacks
    pub(crate) hooks: LifecycleHooks,
    /// Open offset source
    pub(crate) offsets: Box<dyn OffsetSource>,
}

impl WindowManager {
    /// Create a window manager for a fixed set of windows
    pub fn new(
        windows: impl IntoIterator<Item = WindowConfig>,
        config: DesktopConfig,
    ) -> DesktopResult<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected desktop config");
            return Err(err);
        }
        let registry = WindowRegistry::new(windows, config.z_base)?;
        tracing::debug!(windows = registry.count(), "window manager created");

        Ok(Self {
            config,
            viewport: Viewport::default(),
            windows: registry,
            input: DragController::new(),
            timers: TimerQueue::new(),
            hooks: LifecycleHooks::new(),
            offsets: Box::new(RandomOffsets),
        })
    }

    /// Replace the open offset source
    pub fn with_offsets(mut self, offsets: impl OffsetSource + 'static) -> Self {
        self.offsets = Box::new(offsets);
        self
    }

    /// Initialize the viewport with screen dimensions
    ///
    /// Windows opened before `init` are reclamped to the new bounds.
    pub fn init(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Current viewport
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Registered windows
    #[inline]
    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    /// Drag state machine
    #[inline]
    pub fn drag(&self) -> &DragController {
        &self.input
    }

    /// Hook registration
    #[inline]
    pub fn hooks_mut(&mut self) -> &mut LifecycleHooks {
        &mut self.hooks
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("windows", &self.windows.count())
            .field("drag", self.input.state())
            .field("pending_timers", &self.timers.len())
            .field("hooks", &self.hooks)
            .finish()
    }
}
