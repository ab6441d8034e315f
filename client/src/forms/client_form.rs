//! Client intake form (`#form-client`): live validation, submit sweep and
//! draft session.

use std::rc::Rc;

use formkeeper::config::CLIENT_FORM;
use formkeeper::rules::client_rules;
use formkeeper::validation::{focus_first_invalid, refresh_restored, validate_all};
use web_sys::Document;

use crate::dom::control::DomForm;
use crate::dom::host::{DocumentHost, bind_live_validation};
use crate::dom::listen;

use super::session::DraftSession;

/// Wire the page's client form, if present.
pub fn mount(document: &Document) {
    let Some(form) = DomForm::by_id(CLIENT_FORM.form_id) else {
        return;
    };
    let host = DocumentHost::new(document.clone());
    let table = Rc::new(client_rules());
    bind_live_validation(&host, &table);

    let session = DraftSession::mount(document, &form, CLIENT_FORM, |snapshot| {
        let refreshed = refresh_restored(&host, &table, snapshot);
        tracing::debug!(refreshed, "restored fields validated");
    });

    listen(form.element(), "submit", move |event| {
        let outcome = validate_all(&host, &table);
        if !outcome.valid {
            event.prevent_default();
            focus_first_invalid(&host, &outcome);
            tracing::debug!(first_invalid = ?outcome.first_invalid, "client form blocked");
            return;
        }
        tracing::info!("client form valid");
        if let Some(session) = session.as_ref() {
            event.prevent_default();
            session.finish();
        }
    });
}
