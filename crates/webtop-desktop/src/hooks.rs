//! Lifecycle hooks invoked on window open and close
//!
//! Collaborators (audio player, note loader, UI sounds) register callbacks
//! here instead of being called by the window manager directly.

use std::collections::HashMap;
use crate::window::WindowId;

/// Callback receiving the ID of the window that opened or closed
pub type Hook = Box<dyn FnMut(&str)>;

/// Registered open/close callbacks
#[derive(Default)]
pub struct LifecycleHooks {
    open: HashMap<WindowId, Vec<Hook>>,
    close: HashMap<WindowId, Vec<Hook>>,
    any_open: Vec<Hook>,
    any_close: Vec<Hook>,
}

impl LifecycleHooks {
    /// Create an empty hook set
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` each time `id` opens
    pub fn on_open(&mut self, id: impl Into<WindowId>, hook: impl FnMut(&str) + 'static) {
        self.open.entry(id.into()).or_default().push(Box::new(hook));
    }

    /// Run `hook` each time `id` finishes closing
    pub fn on_close(&mut self, id: impl Into<WindowId>, hook: impl FnMut(&str) + 'static) {
        self.close.entry(id.into()).or_default().push(Box::new(hook));
    }

    /// Run `hook` whenever any window opens
    pub fn on_any_open(&mut self, hook: impl FnMut(&str) + 'static) {
        self.any_open.push(Box::new(hook));
    }

    /// Run `hook` whenever any window finishes closing
    pub fn on_any_close(&mut self, hook: impl FnMut(&str) + 'static) {
        self.any_close.push(Box::new(hook));
    }

    /// Invoke open hooks for `id`, returns how many ran
    pub(crate) fn fire_open(&mut self, id: &str) -> usize {
        fire(&mut self.any_open, self.open.get_mut(id), id)
    }

    /// Invoke close hooks for `id`, returns how many ran
    pub(crate) fn fire_close(&mut self, id: &str) -> usize {
        fire(&mut self.any_close, self.close.get_mut(id), id)
    }
}

fn fire(any: &mut [Hook], keyed: Option<&mut Vec<Hook>>, id: &str) -> usize {
    let mut ran = 0;
    for hook in any.iter_mut() {
        hook(id);
        ran += 1;
    }
    if let Some(hooks) = keyed {
        for hook in hooks.iter_mut() {
            hook(id);
            ran += 1;
        }
    }
    ran
}

impl std::fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("open", &self.open.keys().collect::<Vec<_>>())
            .field("close", &self.close.keys().collect::<Vec<_>>())
            .field("any_open", &self.any_open.len())
            .field("any_close", &self.any_close.len())
            .finish()
    }
}
