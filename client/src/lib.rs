//! # client
//!
//! WebAssembly entry point for the form layer. Implements the
//! [`formkeeper`] seams over `web-sys` and mounts the intake forms and the
//! Bootstrap modals found on the current page.
//!
//! Everything that needs a browser is gated behind the `hydrate` feature;
//! host builds only carry the pure helpers in [`page`].

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod forms;
#[cfg(feature = "hydrate")]
pub mod modals;
pub mod page;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Install logging, then mount once the document has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let target = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| mount(&target));
    } else {
        mount(&document);
    }
}

#[cfg(feature = "hydrate")]
fn mount(document: &web_sys::Document) {
    forms::mount_all(document);
    modals::mount_all(document);
    tracing::debug!("form layer mounted");
}
