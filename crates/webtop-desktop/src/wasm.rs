//! WASM exports for the window manager
//!
//! This module provides wasm-bindgen exports for the WindowManager, so the
//! page forwards DOM events into one delegated handler and reads back the
//! render state.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::engine::WindowManager;
use crate::input::{InputResult, PointerEvent};
use crate::window::{WindowConfig, WindowRegion};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Wrap a JS function as a lifecycle hook
fn js_hook(callback: js_sys::Function) -> impl FnMut(&str) + 'static {
    move |id: &str| {
        let this = JsValue::null();
        let arg = JsValue::from_str(id);
        if let Err(err) = callback.call1(&this, &arg) {
            web_sys::console::error_2(&JsValue::from_str("[webtop] lifecycle hook threw"), &err);
        }
    }
}

fn to_js_error(err: crate::error::DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn event(x: f32, y: f32, window_id: Option<String>, region: Option<String>) -> PointerEvent {
    let mut event = PointerEvent::at(x, y);
    if let (Some(id), Some(region)) = (window_id, region.as_deref().and_then(WindowRegion::parse)) {
        event = event.on(id, region);
    }
    event
}

fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

/// Desktop controller for WASM - wraps WindowManager with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    manager: WindowManager,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller from a JSON array of window configs and a JSON
    /// config object (`"{}"` for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(windows_json: &str, config_json: &str) -> Result<DesktopController, JsValue> {
        let windows: Vec<WindowConfig> = serde_json::from_str(windows_json)
            .map_err(|e| to_js_error(e.into()))?;
        let config = DesktopConfig::from_json(config_json).map_err(to_js_error)?;
        let manager = WindowManager::new(windows, config).map_err(to_js_error)?;
        Ok(Self { manager })
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Initialize the viewport with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.manager.init(width, height);
    }

    /// Resize the viewport, returns how many windows were reclamped
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) -> usize {
        self.manager.resize(width, height)
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open the window for a launcher button (`data-app`)
    #[wasm_bindgen]
    pub fn launch(&mut self, app: &str) -> bool {
        self.manager.launch(app, date_now())
    }

    /// Open a window
    #[wasm_bindgen]
    pub fn open_window(&mut self, id: &str) -> bool {
        self.manager.open(id, date_now())
    }

    /// Start closing a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> bool {
        self.manager.close(id, date_now())
    }

    /// Raise a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> Option<u64> {
        self.manager.focus(id)
    }

    /// Whether a window is open
    #[wasm_bindgen]
    pub fn is_open(&self, id: &str) -> bool {
        self.manager.is_open(id)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer down; `region` is `"header"`, `"close"` or `"body"`
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, window_id: Option<String>, region: Option<String>) -> String {
        result_json(&self.manager.handle_pointer_down(&event(x, y, window_id, region)))
    }

    /// Handle pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.manager.handle_pointer_move(&PointerEvent::at(x, y)).is_handled()
    }

    /// Handle pointer up
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.manager.handle_pointer_up().is_handled()
    }

    /// Handle click
    #[wasm_bindgen]
    pub fn click(&mut self, x: f32, y: f32, window_id: Option<String>, region: Option<String>) -> bool {
        self.manager
            .handle_click(&event(x, y, window_id, region), date_now())
            .is_handled()
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Run due transition steps, returns true while more are pending
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.manager.tick(date_now())
    }

    /// Render state as a JSON array, back to front
    #[wasm_bindgen]
    pub fn views_json(&self) -> String {
        self.manager.views_json()
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Call `callback(id)` when window `id` opens
    #[wasm_bindgen]
    pub fn on_open(&mut self, id: &str, callback: js_sys::Function) {
        self.manager.hooks_mut().on_open(id, js_hook(callback));
    }

    /// Call `callback(id)` when window `id` finishes closing
    #[wasm_bindgen]
    pub fn on_close(&mut self, id: &str, callback: js_sys::Function) {
        self.manager.hooks_mut().on_close(id, js_hook(callback));
    }

    /// Call `callback(id)` when any window opens
    #[wasm_bindgen]
    pub fn on_any_open(&mut self, callback: js_sys::Function) {
        self.manager.hooks_mut().on_any_open(js_hook(callback));
    }

    /// Call `callback(id)` when any window finishes closing
    #[wasm_bindgen]
    pub fn on_any_close(&mut self, callback: js_sys::Function) {
        self.manager.hooks_mut().on_any_close(js_hook(callback));
    }
}
