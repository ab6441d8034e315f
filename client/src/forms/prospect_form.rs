//! Prospect intake form (`#form-prospect`). No field rules; submission
//! stands in for the backend call by clearing the draft and leaving.

use formkeeper::config::PROSPECT_FORM;
use formkeeper::guard::Navigator;
use web_sys::Document;

use crate::dom::browser::LocationNavigator;
use crate::dom::control::DomForm;
use crate::dom::listen;

use super::session::DraftSession;

/// Wire the page's prospect form, if present.
pub fn mount(document: &Document) {
    let Some(form) = DomForm::by_id(PROSPECT_FORM.form_id) else {
        return;
    };
    let session = DraftSession::mount(document, &form, PROSPECT_FORM, |_| {});

    listen(form.element(), "submit", move |event| {
        event.prevent_default();
        tracing::info!("prospect form submitted");
        match session.as_ref() {
            Some(session) => session.finish(),
            None => LocationNavigator.navigate(PROSPECT_FORM.redirect_url),
        }
    });
}
