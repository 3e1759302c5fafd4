//! Test doubles for the handler seams
//!
//! Everything is single-threaded and shares state through `Rc`, so a
//! test keeps one clone and hands another to the handler.

use crate::components::copy_handler::{TextSource, Trigger};
use crate::components::toast::ClassList;
use crate::error::CopyError;
use crate::utils::clipboard::PendingWrite;
use crate::utils::{ClipboardWriter, Scheduler};
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Clone, Default)]
pub struct FakeClassList {
    classes: Rc<RefCell<Vec<String>>>,
    mutations: Rc<Cell<usize>>,
}

impl FakeClassList {
    pub fn with_classes(classes: &[&str]) -> Self {
        let list = Self::default();
        *list.classes.borrow_mut() = classes.iter().map(|c| c.to_string()).collect();
        list
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    pub fn has(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    /// Number of add/remove calls seen so far
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }
}

impl ClassList for FakeClassList {
    fn add(&self, classes: &[String]) {
        self.mutations.set(self.mutations.get() + 1);
        let mut list = self.classes.borrow_mut();
        for class in classes {
            if !list.contains(class) {
                list.push(class.clone());
            }
        }
    }

    fn remove(&self, classes: &[String]) {
        self.mutations.set(self.mutations.get() + 1);
        self.classes.borrow_mut().retain(|c| !classes.contains(c));
    }

    fn contains(&self, class: &str) -> bool {
        self.has(class)
    }
}

#[derive(Clone, Default)]
pub struct FakeText(Rc<RefCell<Option<String>>>);

impl FakeText {
    pub fn new(text: &str) -> Self {
        Self(Rc::new(RefCell::new(Some(text.to_string()))))
    }

    pub fn set(&self, text: &str) {
        *self.0.borrow_mut() = Some(text.to_string());
    }
}

impl TextSource for FakeText {
    fn text_content(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct FakeTrigger {
    listener: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
    refusal: Option<String>,
}

impl FakeTrigger {
    /// A trigger that rejects every listener with `reason`
    pub fn failing(reason: &str) -> Self {
        Self {
            refusal: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Simulate a user click; does nothing when nobody is listening
    pub fn click(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.listener.borrow().is_some()
    }
}

impl Trigger for FakeTrigger {
    fn subscribe(&self, listener: Rc<dyn Fn()>) -> Result<(), String> {
        if let Some(reason) = &self.refusal {
            return Err(reason.clone());
        }
        *self.listener.borrow_mut() = Some(listener);
        Ok(())
    }

    fn unsubscribe(&self) {
        self.listener.borrow_mut().take();
    }
}

#[derive(Clone, Default)]
pub struct FakeClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    rejection: Option<CopyError>,
    gate: Option<Rc<Notify>>,
}

impl FakeClipboard {
    pub fn rejecting(error: CopyError) -> Self {
        Self {
            rejection: Some(error),
            ..Self::default()
        }
    }

    /// A clipboard whose writes stay pending until the returned `Notify` fires
    pub fn gated() -> (Self, Rc<Notify>) {
        let gate = Rc::new(Notify::new());
        let clipboard = Self {
            gate: Some(Rc::clone(&gate)),
            ..Self::default()
        };
        (clipboard, gate)
    }

    /// Every payload the handler asked to write, in order
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> PendingWrite {
        // Recorded synchronously, like the browser issuing the request
        self.writes.borrow_mut().push(text.to_string());

        let gate = self.gate.clone();
        let rejection = self.rejection.clone();
        Box::pin(async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }

            match rejection {
                Some(error) => Err(error),
                None => Ok(()),
            }
        })
    }
}

/// Scheduler on a tokio `LocalSet`; pair with a paused clock
#[derive(Clone, Default)]
pub struct TokioScheduler {
    spawned: Rc<Cell<usize>>,
    sleeps: Rc<Cell<usize>>,
}

impl TokioScheduler {
    pub fn spawned(&self) -> usize {
        self.spawned.get()
    }

    /// Number of timers armed so far
    pub fn sleeps(&self) -> usize {
        self.sleeps.get()
    }
}

impl Scheduler for TokioScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawned.set(self.spawned.get() + 1);
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self.sleeps.set(self.sleeps.get() + 1);
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Let spawned local tasks and fired timers run
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

/// Start capturing log records emitted on the current thread
pub fn capture_logs() {
    INIT_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

pub fn take_logs() -> Vec<(log::Level, String)> {
    RECORDS.with(|records| std::mem::take(&mut *records.borrow_mut()))
}
