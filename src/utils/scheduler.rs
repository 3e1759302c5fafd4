//! Task and timer seam
//!
//! The handler never blocks: clipboard writes and hide timers run as
//! detached local tasks. In the browser they go through
//! `wasm_bindgen_futures::spawn_local` and `gloo_timers`.

use futures::future::LocalBoxFuture;
use std::time::Duration;

pub trait Scheduler {
    /// Run `task` to completion in the background. No handle is returned.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// A future that completes after `duration`
    ///
    /// The deadline is measured from the call, not from the first poll.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Scheduler on the browser event loop
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        // setTimeout is armed here, at construction
        Box::pin(gloo_timers::future::TimeoutFuture::new(millis))
    }
}
