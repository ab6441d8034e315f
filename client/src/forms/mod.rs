//! Page wiring for the two draft-enabled intake forms.

pub mod client_form;
pub mod prospect_form;
pub mod session;

use web_sys::Document;

/// Mount every form found on the page. Absent forms are skipped.
pub fn mount_all(document: &Document) {
    client_form::mount(document);
    prospect_form::mount(document);
}
