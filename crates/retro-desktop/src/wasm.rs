//! WASM exports for the desktop window manager
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the page script to drive windows, the taskbar and the start
//! menu, and to render from JSON snapshots.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, MouseEvent};

use crate::engine::{DesktopEngine, DesktopMenuAction, KeyInput, StartMenuAction};
use crate::error::Result;
use crate::window::{WindowId, WindowObserver, WindowRegistry};

/// Log a failed engine call; the render loop keeps going
fn report<T>(op: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(op, %err, "desktop operation failed");
            None
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

// =============================================================================
// Observers
// =============================================================================

/// Forwards lifecycle notifications to JS callbacks (recent programs, sounds)
struct JsObserver {
    on_open: Option<js_sys::Function>,
    on_close: Option<js_sys::Function>,
    on_minimize: Option<js_sys::Function>,
}

impl JsObserver {
    fn call(callback: &Option<js_sys::Function>, id: &WindowId) {
        if let Some(callback) = callback {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(id.as_str())) {
                warn!(window = %id, ?err, "observer callback threw");
            }
        }
    }
}

impl WindowObserver for JsObserver {
    fn on_open(&mut self, id: &WindowId) {
        Self::call(&self.on_open, id);
    }

    fn on_close(&mut self, id: &WindowId) {
        Self::call(&self.on_close, id);
    }

    fn on_minimize(&mut self, id: &WindowId) {
        Self::call(&self.on_minimize, id);
    }
}

// =============================================================================
// Document listeners
// =============================================================================

/// Document-level `mousemove`/`mouseup`/`keydown` subscription
///
/// Attaches the input router on creation; dropping it removes every
/// listener and detaches the router.
struct DocumentListeners {
    document: Document,
    engine: Rc<RefCell<DesktopEngine>>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
}

impl DocumentListeners {
    fn attach(engine: Rc<RefCell<DesktopEngine>>, on_change: Option<js_sys::Function>) -> std::result::Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let on_change = Rc::new(on_change);

        let mouse_move = {
            let engine = Rc::clone(&engine);
            let on_change = Rc::clone(&on_change);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let handled = match engine.try_borrow_mut() {
                    Ok(mut engine) => engine
                        .handle_pointer_move(event.client_x() as f32, event.client_y() as f32)
                        .is_handled(),
                    Err(_) => false,
                };
                if handled {
                    notify_change(&on_change);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let mouse_up = {
            let engine = Rc::clone(&engine);
            let on_change = Rc::clone(&on_change);
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                let handled = match engine.try_borrow_mut() {
                    Ok(mut engine) => engine.handle_pointer_up().is_handled(),
                    Err(_) => false,
                };
                if handled {
                    notify_change(&on_change);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let key_down = {
            let engine = Rc::clone(&engine);
            let on_change = Rc::clone(&on_change);
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let input = KeyInput {
                    key: event.key(),
                    ctrl: event.ctrl_key(),
                    alt: event.alt_key(),
                    in_text_field: is_text_field(event.target()),
                };
                let result = match engine.try_borrow_mut() {
                    Ok(mut engine) => report("handle_key", engine.handle_key(&input)),
                    Err(_) => None,
                };
                if let Some(result) = result {
                    if result.prevent_default {
                        event.prevent_default();
                    }
                    if result.handled {
                        notify_change(&on_change);
                    }
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };

        document.add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("mouseup", mouse_up.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())?;
        engine.borrow_mut().input.attach();

        Ok(Self {
            document,
            engine,
            mouse_move,
            mouse_up,
            key_down,
        })
    }
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", self.mouse_move.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.mouse_up.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref());
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.input.detach();
        }
    }
}

fn notify_change(on_change: &Option<js_sys::Function>) {
    if let Some(callback) = on_change {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            warn!(?err, "change callback threw");
        }
    }
}

fn is_text_field(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|element| matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA"))
}

// =============================================================================
// Controller
// =============================================================================

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: Rc<RefCell<DesktopEngine>>,
    listeners: Option<DocumentListeners>,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopController {
    fn from_engine(engine: DesktopEngine) -> Self {
        console_error_panic_hook::set_once();
        crate::logging::init_default();
        Self {
            engine: Rc::new(RefCell::new(engine)),
            listeners: None,
        }
    }

    /// Run `f` against the engine unless a JS callback re-entered the controller
    fn with_engine<R>(&self, f: impl FnOnce(&mut DesktopEngine) -> R) -> Option<R> {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => Some(f(&mut engine)),
            Err(_) => {
                warn!("re-entrant desktop call ignored");
                None
            }
        }
    }

    fn apply(&self, op: &str, f: impl FnOnce(&mut DesktopEngine) -> Result<()>) {
        if let Some(result) = self.with_engine(f) {
            report(op, result);
        }
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a desktop controller with the portfolio window set
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_engine(DesktopEngine::new())
    }

    /// Create a desktop controller from a JSON registry
    #[wasm_bindgen]
    pub fn with_registry_json(json: &str) -> std::result::Result<DesktopController, JsValue> {
        let registry = WindowRegistry::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self::from_engine(DesktopEngine::with_registry(registry)))
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the desktop with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.with_engine(|engine| engine.init(width, height));
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.with_engine(|engine| engine.resize(width, height));
    }

    /// Subscribe to document pointer and keyboard events
    ///
    /// `on_change` is called after any event that changed desktop state.
    #[wasm_bindgen]
    pub fn attach_document_listeners(&mut self, on_change: Option<js_sys::Function>) -> std::result::Result<(), JsValue> {
        // Drop the old subscription first so its teardown does not detach the new one
        self.listeners = None;
        self.listeners = Some(DocumentListeners::attach(Rc::clone(&self.engine), on_change)?);
        Ok(())
    }

    /// Remove the document subscription
    #[wasm_bindgen]
    pub fn detach_document_listeners(&mut self) {
        self.listeners = None;
    }

    /// Register lifecycle callbacks, each called with the window id
    #[wasm_bindgen]
    pub fn add_observer(
        &mut self,
        on_open: Option<js_sys::Function>,
        on_close: Option<js_sys::Function>,
        on_minimize: Option<js_sys::Function>,
    ) {
        let observer = JsObserver { on_open, on_close, on_minimize };
        self.with_engine(|engine| engine.windows.add_observer(Box::new(observer)));
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window
    #[wasm_bindgen]
    pub fn open_window(&mut self, id: &str) {
        self.apply("open_window", |engine| engine.open_window(id));
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.apply("close_window", |engine| engine.close_window(id));
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.apply("minimize_window", |engine| engine.minimize_window(id));
    }

    /// Toggle maximize for a window
    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: &str) {
        self.apply("toggle_maximize", |engine| engine.toggle_maximize(id));
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.apply("focus_window", |engine| engine.focus_window(id));
    }

    /// Resize a window to fit its content; returns whether the size changed
    #[wasm_bindgen]
    pub fn resize_content(&mut self, id: &str, width: f32, height: f32) -> bool {
        self.with_engine(|engine| report("resize_content", engine.resize_content(id, width, height)))
            .flatten()
            .unwrap_or(false)
    }

    /// Taskbar button click
    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: &str) {
        self.apply("taskbar_click", |engine| engine.taskbar_click(id));
    }

    /// Mouse-down on a window
    #[wasm_bindgen]
    pub fn window_mouse_down(&mut self, id: &str) {
        self.apply("window_mouse_down", |engine| engine.window_mouse_down(id));
    }

    /// Double-click on a title bar
    #[wasm_bindgen]
    pub fn title_bar_double_click(&mut self, id: &str) {
        self.apply("title_bar_double_click", |engine| engine.title_bar_double_click(id));
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Start move drag
    #[wasm_bindgen]
    pub fn start_move_drag(&mut self, id: &str, x: f32, y: f32) {
        self.apply("start_move_drag", |engine| engine.start_move_drag(id, x, y));
    }

    /// Start resize drag; `direction` is one of n, s, e, w, ne, nw, se, sw
    #[wasm_bindgen]
    pub fn start_resize_drag(&mut self, id: &str, direction: &str, x: f32, y: f32) {
        self.apply("start_resize_drag", |engine| engine.start_resize_drag(id, direction, x, y));
    }

    /// Pointer move when not using document listeners
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.with_engine(|engine| engine.handle_pointer_move(x, y).is_handled())
            .unwrap_or(false)
    }

    /// Pointer release when not using document listeners
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.with_engine(|engine| engine.handle_pointer_up().is_handled())
            .unwrap_or(false)
    }

    // =========================================================================
    // Shell
    // =========================================================================

    /// Toggle the start menu
    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.with_engine(|engine| engine.toggle_start_menu());
    }

    /// Close the start menu
    #[wasm_bindgen]
    pub fn close_start_menu(&mut self) {
        self.with_engine(|engine| engine.close_start_menu());
    }

    /// Apply a start menu selection, e.g. `{"type":"open","id":"about"}`
    ///
    /// Returns the outcome as JSON (`"none"` or `"shutDown"`).
    #[wasm_bindgen]
    pub fn start_menu_select(&mut self, action_json: &str) -> String {
        let action: StartMenuAction = match serde_json::from_str(action_json) {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "invalid start menu action");
                return "null".to_string();
            }
        };
        self.with_engine(|engine| report("start_menu_select", engine.start_menu_select(action)))
            .flatten()
            .map(|outcome| to_json(&outcome))
            .unwrap_or_else(|| "null".to_string())
    }

    /// Apply a desktop context menu selection, e.g. `{"type":"properties"}`
    #[wasm_bindgen]
    pub fn desktop_menu_select(&mut self, action_json: &str) {
        let action: DesktopMenuAction = match serde_json::from_str(action_json) {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "invalid desktop menu action");
                return;
            }
        };
        self.apply("desktop_menu_select", |engine| engine.desktop_menu_select(action));
    }

    /// Apply keyboard shortcuts when not using document listeners
    ///
    /// Returns `{"handled": bool, "preventDefault": bool}` as JSON.
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key: &str, ctrl: bool, alt: bool, in_text_field: bool) -> String {
        let input = KeyInput { key: key.to_string(), ctrl, alt, in_text_field };
        let result = self
            .with_engine(|engine| report("handle_key", engine.handle_key(&input)))
            .flatten()
            .unwrap_or_default();
        to_json(&result)
    }

    /// Submit the Run dialog; returns the outcome as JSON
    #[wasm_bindgen]
    pub fn run_command(&mut self, text: &str) -> String {
        self.with_engine(|engine| report("run_command", engine.run_command(text)))
            .flatten()
            .map(|outcome| to_json(&outcome))
            .unwrap_or_else(|| "null".to_string())
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Get the render snapshot as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        match self.engine.try_borrow() {
            Ok(engine) => engine.snapshot_json().unwrap_or_else(|_| "{}".to_string()),
            Err(_) => {
                warn!("snapshot requested during an engine update");
                "{}".to_string()
            }
        }
    }

    /// Check if a drag or resize is in flight
    #[wasm_bindgen]
    pub fn is_interacting(&self) -> bool {
        self.engine
            .try_borrow()
            .map(|engine| engine.windows.is_interacting())
            .unwrap_or(false)
    }
}
