//! Login modal (`#modal-connexion`): focus on open, password visibility
//! toggle, validated submit and a full reset once hidden.

use std::cell::Cell;
use std::rc::Rc;

use formkeeper::modal::{
    LOGIN_FORM_ID, LOGIN_MODAL_ID, PASSWORD_TOGGLE_ID, PasswordToggle, PasswordToggleView, reset_login_fields,
};
use formkeeper::rules::{LoginField, login_rules};
use formkeeper::validation::{FieldHost, FieldId, ValidatedField, focus_first_invalid, validate_all};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom::control::DomForm;
use crate::dom::host::{DocumentHost, bind_live_validation};
use crate::dom::{element_by_id, listen};

/// Handles on the modal's elements plus the toggle state.
struct LoginModal {
    host: DocumentHost,
    form: Option<DomForm>,
    password: Option<HtmlInputElement>,
    toggle_button: Option<Element>,
    toggle: Cell<PasswordToggle>,
}

impl LoginModal {
    fn on_shown(&self) {
        if let Some(field) = self.host.field(LoginField::Identifier.dom_id()) {
            field.focus();
            tracing::debug!("login identifier focused");
        }
    }

    fn on_toggle(&self) {
        let mut toggle = self.toggle.get();
        let view = toggle.toggle();
        self.toggle.set(toggle);
        self.paint(view);
        if let Some(password) = self.password.as_ref() {
            let _ = password.focus();
        }
    }

    fn on_hidden(&self) {
        if let Some(form) = self.form.as_ref() {
            form.reset();
        }
        reset_login_fields(&self.host);
        let mut toggle = self.toggle.get();
        let view = toggle.reset();
        self.toggle.set(toggle);
        self.paint(view);
        tracing::debug!("login modal reset");
    }

    fn paint(&self, view: PasswordToggleView) {
        if let Some(password) = self.password.as_ref() {
            password.set_type(view.input_type);
        }
        if let Some(button) = self.toggle_button.as_ref() {
            let _ = button.set_attribute("aria-pressed", view.aria_pressed);
            let _ = button.set_attribute("aria-label", view.aria_label);
            button.set_text_content(Some(view.icon));
        }
    }
}

/// Wire the login modal, if the page has one.
pub fn mount(document: &Document) {
    let Some(modal) = element_by_id(LOGIN_MODAL_ID) else {
        return;
    };
    let host = DocumentHost::new(document.clone());
    let login = Rc::new(LoginModal {
        form: DomForm::by_id(LOGIN_FORM_ID),
        password: element_by_id(LoginField::Password.dom_id()).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
        toggle_button: element_by_id(PASSWORD_TOGGLE_ID),
        toggle: Cell::new(PasswordToggle::default()),
        host,
    });

    let shown = Rc::clone(&login);
    listen(&modal, "shown.bs.modal", move |_| shown.on_shown());

    if let (Some(button), Some(_)) = (login.toggle_button.as_ref(), login.password.as_ref()) {
        let toggled = Rc::clone(&login);
        listen(button, "click", move |_| toggled.on_toggle());
    }

    if let Some(form) = login.form.as_ref() {
        let table = Rc::new(login_rules());
        bind_live_validation(&login.host, &table);
        let submitted = Rc::clone(&login);
        listen(form.element(), "submit", move |event| {
            event.prevent_default();
            let outcome = validate_all(&submitted.host, &table);
            if !outcome.valid {
                focus_first_invalid(&submitted.host, &outcome);
                return;
            }
            tracing::info!("login form valid");
        });
    }

    let hidden = Rc::clone(&login);
    listen(&modal, "hidden.bs.modal", move |_| hidden.on_hidden());
}
