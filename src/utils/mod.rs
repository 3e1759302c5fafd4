// Utility functions
// Platform seams shared by the handler

pub mod clipboard;
pub mod scheduler;

pub use clipboard::ClipboardWriter;
pub use scheduler::Scheduler;
