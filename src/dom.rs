//! DOM bindings for the copy handler
//!
//! Resolves the page elements by id, wraps them in the handler seams and
//! keeps the resulting installation alive in a thread-local slot.
//!
//! Following the websocket store:
//! - No Closure::forget() - closures stored in thread_local for cleanup
//! - Installing again uninstalls the previous handler first

use crate::components::copy_handler::{install, Handles, Installation, TextSource, Trigger};
use crate::components::toast::ClassList;
use crate::config::HandlerConfig;
use crate::utils::clipboard::WebClipboard;
use crate::utils::scheduler::BrowserScheduler;
use anyhow::{anyhow, Context, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

type Listener = Closure<dyn FnMut(Event)>;

type WebInstallation =
    Installation<DomTrigger, DomText, DomClassList, WebClipboard, BrowserScheduler>;

thread_local! {
    static INSTALLED: RefCell<Option<WebInstallation>> = const { RefCell::new(None) };
    static READY_LISTENER: RefCell<Option<Listener>> = const { RefCell::new(None) };
}

/// Element holding the short URL
pub struct DomText(pub Element);

impl TextSource for DomText {
    fn text_content(&self) -> Option<String> {
        self.0.text_content()
    }
}

/// `classList` of the toast element
pub struct DomClassList(pub Element);

impl ClassList for DomClassList {
    fn add(&self, classes: &[String]) {
        let list = self.0.class_list();
        for class in classes {
            if let Err(e) = list.add_1(class) {
                log::warn!("Failed to add class '{}': {:?}", class, e);
            }
        }
    }

    fn remove(&self, classes: &[String]) {
        let list = self.0.class_list();
        for class in classes {
            if let Err(e) = list.remove_1(class) {
                log::warn!("Failed to remove class '{}': {:?}", class, e);
            }
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// Copy button; activations are `click` events
pub struct DomTrigger {
    element: Element,
    listener: RefCell<Option<Listener>>,
}

impl DomTrigger {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            listener: RefCell::new(None),
        }
    }
}

impl Trigger for DomTrigger {
    fn subscribe(&self, listener: Rc<dyn Fn()>) -> Result<(), String> {
        self.unsubscribe();

        let callback = Closure::wrap(Box::new(move |_: Event| {
            listener();
        }) as Box<dyn FnMut(Event)>);

        self.element
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|e| format!("addEventListener(\"click\") failed: {:?}", e))?;

        *self.listener.borrow_mut() = Some(callback);
        Ok(())
    }

    fn unsubscribe(&self) {
        if let Some(callback) = self.listener.borrow_mut().take() {
            if let Err(e) = self
                .element
                .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to detach click listener: {:?}", e);
            }
        }
    }
}

fn document() -> Result<Document> {
    web_sys::window()
        .context("No window")?
        .document()
        .context("No document")
}

/// Resolve the page elements and install the handler now
///
/// Returns whether the handler was installed (false when the copy button
/// or the short URL element is not on the page).
pub fn mount(config: &HandlerConfig) -> Result<bool> {
    let document = document()?;

    // Runs inside the DOMContentLoaded callback, so leave READY_LISTENER alone
    uninstall_current();

    let handles = Handles {
        trigger: document
            .get_element_by_id(&config.trigger_id)
            .map(DomTrigger::new),
        source: document.get_element_by_id(&config.source_id).map(DomText),
        notification: document
            .get_element_by_id(&config.notification_id)
            .map(DomClassList),
    };

    let installation = install(handles, WebClipboard, BrowserScheduler, config);
    let installed = installation.is_some();
    INSTALLED.with(|slot| *slot.borrow_mut() = installation);

    Ok(installed)
}

/// Mount once the document has been parsed
pub fn install_when_ready(config: HandlerConfig) -> Result<()> {
    let document = document()?;
    clear_ready_listener(&document);

    if document.ready_state() != "loading" {
        mount(&config)?;
        return Ok(());
    }

    defer_mount(&document, config)
}

/// Mount when DOMContentLoaded fires, unless `uninstall` runs first
fn defer_mount(document: &Document, config: HandlerConfig) -> Result<()> {
    let callback = Closure::wrap(Box::new(move |_: Event| {
        if let Err(e) = mount(&config) {
            log::error!("Failed to install copy handler: {:#}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("Failed to listen for DOMContentLoaded: {:?}", e))?;

    READY_LISTENER.with(|slot| *slot.borrow_mut() = Some(callback));
    log::debug!("Copy handler waiting for DOMContentLoaded");

    Ok(())
}

fn clear_ready_listener(document: &Document) {
    if let Some(previous) = READY_LISTENER.with(|slot| slot.borrow_mut().take()) {
        if let Err(e) = document
            .remove_event_listener_with_callback("DOMContentLoaded", previous.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach DOMContentLoaded listener: {:?}", e);
        }
    }
}

fn uninstall_current() {
    if let Some(installation) = INSTALLED.with(|slot| slot.borrow_mut().take()) {
        installation.uninstall();
    }
}

/// Detach the current handler and cancel a mount still waiting for
/// DOMContentLoaded
///
/// Without the second part, `installCopyHandler()` followed by
/// `uninstallCopyHandler()` while the page is loading would still attach
/// a click listener once the document is parsed.
pub fn uninstall() {
    match document() {
        Ok(document) => clear_ready_listener(&document),
        // Nothing can have registered the listener without a document
        Err(_) => drop(READY_LISTENER.with(|slot| slot.borrow_mut().take())),
    }

    uninstall_current();
}

/// Install the copy handler from JavaScript
///
/// `config` is optional; omitted fields fall back to the defaults
/// (`copy-btn`, `short-url`, `toast`, 3000 ms).
#[wasm_bindgen(js_name = installCopyHandler)]
pub fn install_copy_handler(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        HandlerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| {
            JsValue::from(js_sys::Error::new(&format!("Invalid copy handler config: {}", e)))
        })?
    };

    install_when_ready(config).map_err(|e| JsValue::from(js_sys::Error::new(&format!("{:#}", e))))
}

#[wasm_bindgen(js_name = uninstallCopyHandler)]
pub fn uninstall_copy_handler() {
    uninstall();
}
