//! Clipboard error types

use std::fmt;

/// Failure reported by a clipboard write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// No clipboard to write to (no window, or the API is missing in an insecure context)
    Unavailable(String),
    /// The platform rejected the write (permission denied, document not focused, ...)
    Rejected(String),
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "Clipboard unavailable: {}", reason),
            Self::Rejected(reason) => write!(f, "Clipboard write rejected: {}", reason),
        }
    }
}

impl std::error::Error for CopyError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for CopyError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        // DOMException is not a js_sys::Error in every browser, so check both
        let reason = if let Some(err) = value.dyn_ref::<web_sys::DomException>() {
            format!("{}: {}", err.name(), err.message())
        } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            String::from(err.message())
        } else if let Some(text) = value.as_string() {
            text
        } else {
            format!("{:?}", value)
        };

        Self::Rejected(reason)
    }
}
