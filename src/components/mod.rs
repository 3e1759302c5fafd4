pub mod copy_handler;
pub mod toast;

pub use copy_handler::{install, CopyToClipboardHandler, Handles, Installation, TextSource, Trigger};
pub use toast::{ClassList, Toast};
