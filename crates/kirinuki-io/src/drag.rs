//! Document-level drag-and-drop default suppression.
//!
//! Dropping a file anywhere outside the drop zone would otherwise make
//! the browser navigate to (or open) the dropped file. This module
//! installs document-wide listeners for all four drag events that call
//! `preventDefault`, mirroring what the drop zone does locally.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

/// Errors that can occur while installing the listeners.
#[derive(Debug, thiserror::Error)]
pub enum DragGuardError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DragGuardError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Drag events whose default handling must be suppressed page-wide.
const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

/// Install the document-wide drag listeners.
///
/// Call once at app startup. The closures are intentionally leaked
/// (`Closure::forget`); they live for the page lifetime.
///
/// # Errors
///
/// Returns [`DragGuardError::JsError`] if the document is unavailable
/// or a listener cannot be registered.
pub fn suppress_default_drag() -> Result<(), DragGuardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DragGuardError::JsError("no document".into()))?;

    for event_name in DRAG_EVENTS {
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
        });
        document.add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    Ok(())
}
