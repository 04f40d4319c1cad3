use meshtopo_core::UpAxis;
use wasm_bindgen::JsValue;

/// Set panic hook for better error messages in the browser
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Axis from the viewer's 0/1/2 selector; anything else falls back to Y-up
pub(crate) fn axis_from_index(index: u8) -> UpAxis {
    UpAxis::from_index(index as i64).unwrap_or_default()
}

/// Report a recoverable failure on the browser console
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
