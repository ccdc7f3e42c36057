//! Transition module
//!
//! Two-phase visual transitions for opening and closing windows, and the
//! cancellable timer queue that defers their second phase.

mod phase;
mod timer;

pub use phase::{TransitionPhase, HIDDEN_SCALE};
pub use timer::TimerQueue;

use crate::window::WindowId;

/// Deferred second phase of a window transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionTask {
    /// Apply the entered state after the entering state was rendered
    Enter(WindowId),
    /// Hide the window once the exit animation has played
    FinishClose(WindowId),
}

impl TransitionTask {
    /// Window this task belongs to
    pub fn window_id(&self) -> &str {
        match self {
            TransitionTask::Enter(id) | TransitionTask::FinishClose(id) => id,
        }
    }
}
