//! Bootstrap modal wiring. State transitions live in
//! [`formkeeper::modal`]; this module only moves them onto the page.

pub mod delete;
pub mod login;

use web_sys::Document;

/// Mount every modal found on the page.
pub fn mount_all(document: &Document) {
    login::mount(document);
    delete::mount();
}
