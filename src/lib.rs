//! Copy-to-clipboard handler for short URL pages
//!
//! Wires a trigger control to the clipboard and flashes a toast
//! notification when the copy succeeds. Everything the handler touches
//! is injected, so the same logic runs against the DOM in the browser
//! and against test doubles natively.

pub mod components;
pub mod config;
pub mod error;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(test)]
mod test_support;

pub use components::copy_handler::{
    install, CopyToClipboardHandler, Handles, Installation, TextSource, Trigger,
};
pub use components::toast::{ClassList, Toast};
pub use config::{HandlerConfig, HidePolicy};
pub use error::CopyError;
pub use utils::clipboard::{ClipboardWriter, PendingWrite};
pub use utils::scheduler::Scheduler;
