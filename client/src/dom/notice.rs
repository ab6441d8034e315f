//! Manual-save confirmation line and the restore banner.

use std::cell::RefCell;
use std::rc::Rc;

use formkeeper::status::{BANNER_ID, NOTICE_ID, manual_save_notice, restore_banner_text};
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

const NOTICE_CLASS: &str = "text-success ms-2";
const BANNER_CLASS: &str = "alert alert-info";

/// `#msg-brouillon` status line next to a save button, cleared after a delay.
#[derive(Clone)]
pub struct SaveNotice {
    clear_ms: u32,
    clear: Rc<RefCell<Option<Timeout>>>,
}

impl SaveNotice {
    pub fn new(clear_ms: u64) -> Self {
        Self { clear_ms: u32::try_from(clear_ms).unwrap_or(u32::MAX), clear: Rc::new(RefCell::new(None)) }
    }

    /// Show "saved at `time_label`" beside `button`, creating the zone on
    /// first use.
    pub fn show(&self, button: &Element, time_label: &str) {
        let Some(zone) = notice_zone(button) else {
            return;
        };
        zone.set_text_content(Some(&manual_save_notice(time_label)));
        let zone_for_clear = zone.clone();
        let timer = Timeout::new(self.clear_ms, move || zone_for_clear.set_text_content(Some("")));
        *self.clear.borrow_mut() = Some(timer);
    }
}

fn notice_zone(button: &Element) -> Option<Element> {
    let document = super::document()?;
    if let Some(zone) = document.get_element_by_id(NOTICE_ID) {
        return Some(zone);
    }
    let zone = document.create_element("small").ok()?;
    zone.set_id(NOTICE_ID);
    zone.set_class_name(NOTICE_CLASS);
    let _ = zone.set_attribute("role", "status");
    let _ = zone.set_attribute("aria-live", "polite");
    let parent = button.parent_node()?;
    parent.append_child(&zone).ok()?;
    Some(zone)
}

/// Insert (or refresh) the restore banner just before `form`.
pub fn show_restore_banner(document: &Document, form: &Element, saved_at: Option<&str>) {
    let text = restore_banner_text(saved_at);
    if let Some(existing) = document.get_element_by_id(BANNER_ID) {
        existing.set_text_content(Some(&text));
        return;
    }
    let Ok(banner) = document.create_element("div") else {
        return;
    };
    banner.set_id(BANNER_ID);
    banner.set_class_name(BANNER_CLASS);
    let _ = banner.set_attribute("role", "status");
    banner.set_text_content(Some(&text));
    let Some(parent) = form.parent_node() else {
        tracing::warn!("form has no parent; restore banner not shown");
        return;
    };
    if let Err(err) = parent.insert_before(&banner, Some(form.as_ref())) {
        tracing::warn!(error = ?err, "restore banner insertion failed");
    }
}
