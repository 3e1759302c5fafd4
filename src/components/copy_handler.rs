//! Copy-to-clipboard handler
//!
//! Bridges a trigger activation to the clipboard and confirms a
//! successful copy with a toast that hides itself after a fixed delay.
//!
//! Activation never blocks: the clipboard request goes out during the
//! activation, its outcome is awaited in a detached task, and the hide is
//! another detached task scheduled per successful copy.
//! Under [`HidePolicy::Independent`] those hide tasks are not tracked, so
//! when several copies overlap the first hide to fire wins.

use crate::components::toast::{ClassList, Toast};
use crate::config::{HandlerConfig, HidePolicy};
use crate::error::CopyError;
use crate::utils::clipboard::PendingWrite;
use crate::utils::{ClipboardWriter, Scheduler};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Element whose text content is the copy payload
pub trait TextSource {
    fn text_content(&self) -> Option<String>;
}

impl<T: TextSource + ?Sized> TextSource for Rc<T> {
    fn text_content(&self) -> Option<String> {
        (**self).text_content()
    }
}

/// Control the user activates to start a copy
pub trait Trigger {
    /// Call `listener` on every activation until `unsubscribe`
    fn subscribe(&self, listener: Rc<dyn Fn()>) -> Result<(), String>;
    fn unsubscribe(&self);
}

/// The three page elements the handler works with
///
/// Any of them may be missing; `install` decides what that means.
pub struct Handles<T, S, N> {
    pub trigger: Option<T>,
    pub source: Option<S>,
    pub notification: Option<N>,
}

pub struct CopyToClipboardHandler<S, N, C, R> {
    inner: Rc<Inner<S, N, C, R>>,
}

struct Inner<S, N, C, R> {
    source: S,
    toast: Option<Toast<N>>,
    clipboard: C,
    scheduler: R,
    hide_after: Duration,
    hide_policy: HidePolicy,
    // Bumped on every successful copy; only read under HidePolicy::Restart
    generation: Cell<u64>,
}

impl<S, N, C, R> Clone for CopyToClipboardHandler<S, N, C, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, N, C, R> CopyToClipboardHandler<S, N, C, R>
where
    S: TextSource + 'static,
    N: ClassList + 'static,
    C: ClipboardWriter + 'static,
    R: Scheduler + 'static,
{
    pub fn new(
        source: S,
        notification: Option<N>,
        clipboard: C,
        scheduler: R,
        config: &HandlerConfig,
    ) -> Self {
        let toast = notification.map(|element| {
            Toast::new(
                element,
                config.hidden_classes.clone(),
                config.visible_classes.clone(),
            )
        });

        Self {
            inner: Rc::new(Inner {
                source,
                toast,
                clipboard,
                scheduler,
                hide_after: config.hide_after(),
                hide_policy: config.hide_policy,
                generation: Cell::new(0),
            }),
        }
    }

    /// Handle a trigger activation
    ///
    /// The clipboard request is issued before this returns, inside the
    /// user gesture. Waiting for the outcome and the toast happen in the
    /// background.
    pub fn activate(&self) {
        let write = self.start_write();
        let handler = self.clone();
        self.inner.scheduler.spawn(Box::pin(async move {
            // Failures are logged inside finish_copy()
            let _ = handler.finish_copy(write.await);
        }));
    }

    /// Current short URL with surrounding whitespace removed
    pub fn payload(&self) -> String {
        self.inner
            .source
            .text_content()
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Copy the short URL and show the toast on success
    pub async fn copy(&self) -> Result<(), CopyError> {
        let write = self.start_write();
        self.finish_copy(write.await)
    }

    fn start_write(&self) -> PendingWrite {
        let payload = self.payload();
        self.inner.clipboard.write_text(&payload)
    }

    fn finish_copy(&self, result: Result<(), CopyError>) -> Result<(), CopyError> {
        match result {
            Ok(()) => {
                log::info!("Short URL copied to clipboard");
                self.show_toast();
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to copy: {}", e);
                Err(e)
            }
        }
    }

    pub fn is_notification_visible(&self) -> bool {
        self.inner
            .toast
            .as_ref()
            .map(|toast| toast.is_visible())
            .unwrap_or(false)
    }

    fn show_toast(&self) {
        let Some(toast) = &self.inner.toast else {
            log::warn!("No notification element, copy not confirmed on screen");
            return;
        };

        toast.show();

        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);

        let timer = self.inner.scheduler.sleep(self.inner.hide_after);
        let handler = self.clone();
        self.inner.scheduler.spawn(Box::pin(async move {
            timer.await;
            handler.hide_toast(generation);
        }));
    }

    fn hide_toast(&self, generation: u64) {
        if self.inner.hide_policy == HidePolicy::Restart && self.inner.generation.get() != generation {
            log::debug!("Hide for copy #{} superseded by a newer copy", generation);
            return;
        }

        if let Some(toast) = &self.inner.toast {
            toast.hide();
        }
    }
}

/// A handler wired to its trigger
pub struct Installation<T: Trigger, S, N, C, R> {
    trigger: T,
    handler: CopyToClipboardHandler<S, N, C, R>,
}

impl<T: Trigger, S, N, C, R> Installation<T, S, N, C, R> {
    pub fn handler(&self) -> &CopyToClipboardHandler<S, N, C, R> {
        &self.handler
    }

    /// Detach from the trigger. Hides already scheduled still run.
    pub fn uninstall(self) {
        self.trigger.unsubscribe();
        log::debug!("Copy handler uninstalled");
    }
}

/// Wire the handler to the page
///
/// Returns `None` without touching anything when the trigger or the
/// short URL element is missing, and `None` when the trigger refuses the
/// listener.
pub fn install<T, S, N, C, R>(
    handles: Handles<T, S, N>,
    clipboard: C,
    scheduler: R,
    config: &HandlerConfig,
) -> Option<Installation<T, S, N, C, R>>
where
    T: Trigger,
    S: TextSource + 'static,
    N: ClassList + 'static,
    C: ClipboardWriter + 'static,
    R: Scheduler + 'static,
{
    let Handles {
        trigger,
        source,
        notification,
    } = handles;

    let (Some(trigger), Some(source)) = (trigger, source) else {
        log::debug!(
            "'#{}' or '#{}' not on page, copy handler not installed",
            config.trigger_id,
            config.source_id
        );
        return None;
    };

    if notification.is_none() {
        log::warn!("'#{}' not on page, copies will not show a toast", config.notification_id);
    }

    let handler = CopyToClipboardHandler::new(source, notification, clipboard, scheduler, config);

    let listener = handler.clone();
    if let Err(e) = trigger.subscribe(Rc::new(move || listener.activate())) {
        log::error!(
            "Failed to attach copy handler to '#{}': {}",
            config.trigger_id,
            e
        );
        return None;
    }

    log::info!(
        "Copy handler installed on '#{}' (hide policy: {})",
        config.trigger_id,
        config.hide_policy.as_str()
    );

    Some(Installation { trigger, handler })
}
