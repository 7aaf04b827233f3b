//! Helpers for the builder: dirty hashing and the window dirty flag.

use wasm_bindgen::JsValue;

use common::model::form::FormSchema;

/// A new draft starts with one empty page so there is something to edit.
pub fn fresh_draft() -> FormSchema {
    FormSchema::default().with_page_added()
}

/// MD5 hex digest of the serialized schema, used for dirty tracking.
/// Hashing the wire form means "dirty" is exactly "would save something
/// different from what the backend has".
pub fn compute_schema_md5(schema: &FormSchema) -> String {
    let serialized = serde_json::to_string(schema).unwrap_or_default();
    format!("{:x}", md5::compute(serialized))
}

/// Mirrors the dirty state onto `window.app_dirty` so the host page can
/// warn before navigation discards edits.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
