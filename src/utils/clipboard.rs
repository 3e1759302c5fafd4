//! Clipboard utilities for copying text
//!
//! `ClipboardWriter` is the seam the copy handler writes through. In the
//! browser it is backed by the Web Clipboard API.

use crate::error::CopyError;
use futures::future::LocalBoxFuture;
use std::rc::Rc;

/// Write in flight; resolves once the platform accepted or refused it
pub type PendingWrite = LocalBoxFuture<'static, Result<(), CopyError>>;

/// Asynchronous clipboard write capability
pub trait ClipboardWriter {
    /// Start storing `text` on the system clipboard
    ///
    /// The request must be issued before this returns, so it still runs
    /// inside the user gesture that triggered it. Only the outcome is
    /// awaited later.
    fn write_text(&self, text: &str) -> PendingWrite;
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Rc<T> {
    fn write_text(&self, text: &str) -> PendingWrite {
        (**self).write_text(text)
    }
}

/// Clipboard backed by `navigator.clipboard`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WebClipboard;

#[cfg(target_arch = "wasm32")]
impl ClipboardWriter for WebClipboard {
    fn write_text(&self, text: &str) -> PendingWrite {
        match start_write(text) {
            Ok(promise) => Box::pin(async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(CopyError::from)
            }),
            Err(e) => Box::pin(futures::future::ready(Err(e))),
        }
    }
}

/// Call `navigator.clipboard.writeText` and hand back its promise
#[cfg(target_arch = "wasm32")]
fn start_write(text: &str) -> Result<js_sys::Promise, CopyError> {
    let window = web_sys::window().ok_or_else(|| CopyError::Unavailable("No window".to_string()))?;
    let navigator = window.navigator();
    let clipboard = navigator.clipboard();

    // navigator.clipboard is undefined outside secure contexts
    if clipboard.is_undefined() {
        return Err(CopyError::Unavailable(
            "navigator.clipboard is not available (insecure context?)".to_string(),
        ));
    }

    Ok(clipboard.write_text(text))
}
