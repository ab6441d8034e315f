//! Delete-confirmation modal (`#modal-suppression`).
//!
//! Bootstrap fires `show.bs.modal` with the triggering button as
//! `relatedTarget`; its `data-nom` names the entity. Confirming disables the
//! button and closes the modal through `bootstrap.Modal.getInstance(..)` once
//! the simulated request delay has passed.

use std::cell::RefCell;
use std::rc::Rc;

use formkeeper::config::DEFAULT_DELETE_CLOSE_MS;
use formkeeper::modal::{DELETE_CONFIRM_ID, DELETE_MODAL_ID, DELETE_NAME_ATTR, DELETE_NAME_ID, DeleteModal};
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlButtonElement};

use crate::dom::{element_by_id, listen};
use crate::page::{PENDING_NAME_ATTR, trigger_name};

struct DeleteDialog {
    modal: Element,
    name_zone: Option<Element>,
    confirm: Option<HtmlButtonElement>,
    state: RefCell<DeleteModal>,
}

impl DeleteDialog {
    fn on_show(&self, event: &Event) {
        let name = related_target(event).and_then(|trigger| trigger_name(trigger.get_attribute(DELETE_NAME_ATTR)));
        let Some(label) = self.state.borrow_mut().on_show(name.as_deref()) else {
            return;
        };
        if let Some(zone) = self.name_zone.as_ref() {
            zone.set_text_content(Some(&label));
        }
        if let Some(name) = name.as_deref() {
            let _ = self.modal.set_attribute(PENDING_NAME_ATTR, name);
            tracing::debug!(name, "delete modal ready");
        }
    }

    fn on_confirm(&self) {
        let Some(name) = self.state.borrow_mut().on_confirm() else {
            return;
        };
        self.paint_button();
        let modal = self.modal.clone();
        Timeout::new(millis_u32(DEFAULT_DELETE_CLOSE_MS), move || {
            tracing::info!(name = %name, "deletion confirmed");
            if let Err(err) = bootstrap_hide(&modal) {
                tracing::warn!(error = ?err, "bootstrap modal hide failed");
            }
        })
        .forget();
    }

    fn on_hidden(&self) {
        let placeholder = self.state.borrow_mut().on_hidden();
        self.paint_button();
        let _ = self.modal.remove_attribute(PENDING_NAME_ATTR);
        if let Some(zone) = self.name_zone.as_ref() {
            zone.set_text_content(Some(&placeholder));
        }
    }

    fn paint_button(&self) {
        let Some(button) = self.confirm.as_ref() else {
            return;
        };
        let view = self.state.borrow().button_view();
        button.set_disabled(view.disabled);
        button.set_text_content(Some(view.label));
    }
}

/// The `relatedTarget` of a Bootstrap modal event, if it is an element.
fn related_target(event: &Event) -> Option<Element> {
    Reflect::get(event.as_ref(), &JsValue::from_str("relatedTarget"))
        .ok()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

/// `bootstrap.Modal.getInstance(modal)?.hide()`.
fn bootstrap_hide(modal: &Element) -> Result<(), JsValue> {
    let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))?;
    let modal_api = Reflect::get(&bootstrap, &JsValue::from_str("Modal"))?;
    let get_instance: Function = Reflect::get(&modal_api, &JsValue::from_str("getInstance"))?.dyn_into()?;
    let instance = get_instance.call1(&modal_api, modal.as_ref())?;
    if instance.is_null() || instance.is_undefined() {
        return Ok(());
    }
    let hide: Function = Reflect::get(&instance, &JsValue::from_str("hide"))?.dyn_into()?;
    hide.call0(&instance)?;
    Ok(())
}

fn millis_u32(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// Wire the delete modal, if the page has one.
pub fn mount() {
    let Some(modal) = element_by_id(DELETE_MODAL_ID) else {
        return;
    };
    let dialog = Rc::new(DeleteDialog {
        name_zone: element_by_id(DELETE_NAME_ID),
        confirm: element_by_id(DELETE_CONFIRM_ID).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()),
        state: RefCell::new(DeleteModal::new()),
        modal: modal.clone(),
    });

    let shown = Rc::clone(&dialog);
    listen(&modal, "show.bs.modal", move |event| shown.on_show(&event));

    if let Some(button) = dialog.confirm.as_ref() {
        let confirmed = Rc::clone(&dialog);
        listen(button, "click", move |_| confirmed.on_confirm());
    }

    let hidden = Rc::clone(&dialog);
    listen(&modal, "hidden.bs.modal", move |_| hidden.on_hidden());
}
