//! Window open/close sequences and deferred transition steps

use crate::error::{DesktopError, DesktopResult};
use crate::transition::{TransitionPhase, TransitionTask};
use super::WindowManager;

impl WindowManager {
    /// Open a window, returns true if it was closed before
    ///
    /// Unknown IDs are ignored. Opening an open window only raises it.
    pub fn open(&mut self, id: &str, now_ms: f64) -> bool {
        self.try_open(id, now_ms).unwrap_or_else(|err| {
            tracing::debug!(%err, "open ignored");
            false
        })
    }

    /// Open a window, reporting unknown IDs
    pub fn try_open(&mut self, id: &str, now_ms: f64) -> DesktopResult<bool> {
        check_timestamp(now_ms)?;
        let (was_open, phase) = self
            .windows
            .get(id)
            .map(|w| (w.is_open(), w.phase))
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))?;

        let opened = if !was_open {
            let offset = self.offsets.next_offset_vec(self.config.open_jitter);
            self.windows.show(id, offset, &self.viewport)?;
            self.begin_enter(id, now_ms);
            true
        } else if phase == TransitionPhase::Exiting {
            // Reopened during the exit animation: it never actually closed
            tracing::debug!(window = id, "close cancelled by reopen");
            self.begin_enter(id, now_ms);
            false
        } else {
            false
        };

        let z = self.windows.bring_to_front(id)?;
        tracing::debug!(window = id, z, opened, "open");

        if opened {
            self.hooks.fire_open(id);
        }
        Ok(opened)
    }

    /// Open the window belonging to a launcher (`"{app}-window"`)
    pub fn launch(&mut self, app: &str, now_ms: f64) -> bool {
        self.open(&launcher_window_id(app), now_ms)
    }

    /// Start the close sequence, returns true if it started
    ///
    /// The window stays open until `close_delay_ms` has elapsed on
    /// [`tick`](Self::tick). Closed, closing and unknown windows are ignored.
    pub fn close(&mut self, id: &str, now_ms: f64) -> bool {
        self.try_close(id, now_ms).unwrap_or_else(|err| {
            tracing::debug!(%err, "close ignored");
            false
        })
    }

    /// Start the close sequence, reporting unknown IDs
    pub fn try_close(&mut self, id: &str, now_ms: f64) -> DesktopResult<bool> {
        check_timestamp(now_ms)?;
        let (was_open, phase) = self
            .windows
            .get(id)
            .map(|w| (w.is_open(), w.phase))
            .ok_or_else(|| DesktopError::WindowNotFound(id.to_string()))?;

        if !was_open || phase == TransitionPhase::Exiting {
            return Ok(false);
        }

        self.cancel_transitions(id);
        self.set_phase(id, TransitionPhase::Exiting);
        self.timers.schedule(
            now_ms + self.config.close_delay_ms,
            TransitionTask::FinishClose(id.to_string()),
        );
        tracing::debug!(window = id, delay_ms = self.config.close_delay_ms, "close started");
        Ok(true)
    }

    /// Raise a window without changing anything else
    pub fn focus(&mut self, id: &str) -> Option<u64> {
        self.try_focus(id)
            .map_err(|err| tracing::debug!(%err, "focus ignored"))
            .ok()
    }

    /// Raise a window, reporting unknown IDs
    #[inline]
    pub fn try_focus(&mut self, id: &str) -> DesktopResult<u64> {
        self.windows.bring_to_front(id)
    }

    /// Whether `id` is open (still true while its exit animation plays)
    #[inline]
    pub fn is_open(&self, id: &str) -> bool {
        self.windows.is_open(id)
    }

    /// Whether `id` has a deferred transition step outstanding
    pub fn is_transitioning(&self, id: &str) -> bool {
        self.timers.any(|task| task.window_id() == id)
    }

    /// Earliest time a pending transition step becomes due
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_due()
    }

    /// Run due transition steps, returns true while more are pending
    pub fn tick(&mut self, now_ms: f64) -> bool {
        for task in self.timers.drain_due(now_ms) {
            match task {
                TransitionTask::Enter(id) => self.finish_enter(&id),
                TransitionTask::FinishClose(id) => {
                    if let Err(err) = self.finish_close(&id) {
                        tracing::debug!(%err, "deferred close dropped");
                    }
                }
            }
        }
        !self.timers.is_empty()
    }

    /// Apply the entering state and defer the entered state
    fn begin_enter(&mut self, id: &str, now_ms: f64) {
        self.cancel_transitions(id);
        self.set_phase(id, TransitionPhase::Entering);
        self.timers.schedule(
            now_ms + self.config.enter_delay_ms,
            TransitionTask::Enter(id.to_string()),
        );
    }

    fn finish_enter(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.phase == TransitionPhase::Entering {
                window.phase = TransitionPhase::Entered;
            }
        }
    }

    /// Hide the window and stop its collaborators
    fn finish_close(&mut self, id: &str) -> DesktopResult<()> {
        if self.input.session().is_some_and(|s| s.window_id == id) {
            self.input.end()?;
        }

        if self.windows.hide(id)? {
            self.set_phase(id, TransitionPhase::Idle);
            let ran = self.hooks.fire_close(id);
            tracing::debug!(window = id, hooks = ran, "closed");
        }
        Ok(())
    }

    fn cancel_transitions(&mut self, id: &str) {
        let cancelled = self.timers.cancel_where(|task| task.window_id() == id);
        if cancelled > 0 {
            tracing::trace!(window = id, cancelled, "pending transition cancelled");
        }
    }

    fn set_phase(&mut self, id: &str, phase: TransitionPhase) {
        if let Some(window) = self.windows.get_mut(id) {
            window.phase = phase;
        }
    }
}

/// Deadlines derived from a NaN or infinite clock would never come due
fn check_timestamp(now_ms: f64) -> DesktopResult<()> {
    if now_ms.is_finite() {
        Ok(())
    } else {
        Err(DesktopError::InvalidTimestamp)
    }
}

/// Window ID opened by a launcher button
pub fn launcher_window_id(app: &str) -> String {
    format!("{app}-window")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::manager;
    use crate::math::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_open_assigns_increasing_z() {
        let mut wm = manager();

        assert!(wm.open("a", 0.0));
        assert_eq!(wm.windows().get("a").unwrap().z_order, 1);
        assert!(wm.open("b", 0.0));
        assert_eq!(wm.windows().get("b").unwrap().z_order, 2);
        assert_eq!(wm.windows().focused().unwrap().id, "b");
    }

    #[test]
    fn test_open_unknown_is_noop() {
        let mut wm = manager();
        assert!(!wm.open("missing", 0.0));
        assert!(wm.try_open("missing", 0.0).is_err());
        assert_eq!(wm.windows().top_z(), 0);
    }

    #[test]
    fn test_open_runs_hook_once() {
        let mut wm = manager();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        wm.hooks_mut().on_open("a", move |_| *c.borrow_mut() += 1);

        wm.open("a", 0.0);
        wm.open("a", 5.0);
        assert_eq!(*count.borrow(), 1);
        // Second open still raised it
        assert_eq!(wm.windows().get("a").unwrap().z_order, 2);
    }

    #[test]
    fn test_open_two_phase() {
        let mut wm = manager();
        wm.open("a", 100.0);
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Entering);
        assert!(wm.is_transitioning("a"));

        assert!(!wm.tick(100.0));
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Entered);
    }

    #[test]
    fn test_open_positions_from_base() {
        let mut wm = manager().with_offsets(crate::offset::FixedOffset(25.0));
        wm.open("a", 0.0);
        assert_eq!(wm.windows().get("a").unwrap().position, Vec2::new(35.0, 35.0));
    }

    #[test]
    fn test_close_waits_for_delay() {
        let mut wm = manager();
        wm.open("a", 0.0);
        wm.tick(0.0);

        assert!(wm.close("a", 1000.0));
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Exiting);
        assert!(wm.is_open("a"));

        wm.tick(1199.0);
        assert!(wm.is_open("a"));

        wm.tick(1200.0);
        assert!(!wm.is_open("a"));
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Idle);
    }

    #[test]
    fn test_close_idempotent() {
        let mut wm = manager();
        assert!(!wm.close("a", 0.0));

        wm.open("a", 0.0);
        assert!(wm.close("a", 0.0));
        assert!(!wm.close("a", 50.0));
        assert_eq!(wm.next_deadline(), Some(200.0));

        wm.tick(200.0);
        let pos = wm.windows().get("a").unwrap().position;
        assert!(!wm.close("a", 300.0));
        assert_eq!(wm.windows().get("a").unwrap().position, pos);
    }

    #[test]
    fn test_non_finite_clock_rejected() {
        let mut wm = manager();
        assert_eq!(wm.try_open("a", f64::NAN), Err(DesktopError::InvalidTimestamp));
        assert!(!wm.is_open("a"));

        wm.open("a", 0.0);
        wm.tick(0.0);
        assert!(!wm.close("a", f64::NAN));
        assert_eq!(wm.try_close("a", f64::INFINITY), Err(DesktopError::InvalidTimestamp));
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Entered);
        assert!(!wm.tick(1e12));

        // A later close with a real clock still completes
        assert!(wm.close("a", 1000.0));
        wm.tick(1200.0);
        assert!(!wm.is_open("a"));
    }

    #[test]
    fn test_teardown_runs_with_visibility_flip() {
        let mut wm = manager();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        wm.hooks_mut().on_close("a", move |id| s.borrow_mut().push(id.to_string()));

        wm.open("a", 0.0);
        wm.close("a", 0.0);
        wm.tick(100.0);
        assert!(seen.borrow().is_empty());

        wm.tick(200.0);
        assert_eq!(*seen.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_close_while_entering_cancels_enter() {
        let mut wm = manager();
        wm.open("a", 0.0);
        wm.close("a", 0.0);

        wm.tick(0.0);
        // Enter step was cancelled, phase stays exiting
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Exiting);
        wm.tick(200.0);
        assert!(!wm.is_open("a"));
    }

    #[test]
    fn test_reopen_while_exiting_keeps_window_open() {
        let mut wm = manager();
        let opens = Rc::new(RefCell::new(0));
        let closes = Rc::new(RefCell::new(0));
        let o = opens.clone();
        wm.hooks_mut().on_open("a", move |_| *o.borrow_mut() += 1);
        let c = closes.clone();
        wm.hooks_mut().on_close("a", move |_| *c.borrow_mut() += 1);

        wm.open("a", 0.0);
        wm.tick(0.0);
        wm.close("a", 10.0);
        assert!(!wm.open("a", 100.0));
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Entering);

        wm.tick(500.0);
        assert!(wm.is_open("a"));
        assert_eq!(wm.windows().get("a").unwrap().phase, TransitionPhase::Entered);
        assert_eq!(*opens.borrow(), 1);
        assert_eq!(*closes.borrow(), 0);
    }

    #[test]
    fn test_launch_maps_to_window_id() {
        let mut wm = manager();
        assert_eq!(launcher_window_id("music"), "music-window");
        // No "music-window" registered in the test manager
        assert!(!wm.launch("music", 0.0));
    }

    #[test]
    fn test_focus_raises() {
        let mut wm = manager();
        wm.open("a", 0.0);
        wm.open("b", 0.0);
        assert_eq!(wm.focus("a"), Some(3));
        assert_eq!(wm.focus("zzz"), None);
    }
}
