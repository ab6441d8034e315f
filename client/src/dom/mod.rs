//! `web-sys` implementations of the core crate's seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `formkeeper` never touches the browser. Each submodule here implements one
//! of its traits over the live document so the page wiring in
//! [`crate::forms`] and [`crate::modals`] can call the shared behavior
//! directly.
//!
//! Listeners registered through [`listen`] live for the lifetime of the page
//! and are leaked with `Closure::forget`.

pub mod badge;
pub mod browser;
pub mod clock;
pub mod control;
pub mod host;
pub mod notice;
pub mod storage;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget};

use crate::page::{data_attribute, millis_from_js};

/// The current document, if any.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element with `id`, if present.
pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// Attach `handler` to `event` on `target` for the life of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        Ok(()) => cb.forget(),
        Err(err) => tracing::warn!(event, error = ?err, "listener registration failed"),
    }
}

/// Milliseconds since the epoch, as seen by the browser.
pub fn now_ms() -> u64 {
    millis_from_js(js_sys::Date::now())
}

/// Lookup reading `data-<key>` attributes from `element`.
pub fn data_lookup(element: &Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |key| element.get_attribute(&data_attribute(key))
}
