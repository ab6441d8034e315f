//! Document-backed field lookup and live validation binding.

use std::rc::Rc;

use formkeeper::validation::{FieldEvent, FieldHost, FieldId, MessageRegion, RuleTable, handle_field_event};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::control::DomControl;
use super::listen;

/// Message region (`<id>-erreur`) below a field.
#[derive(Clone, Debug)]
pub struct DomRegion(HtmlElement);

impl MessageRegion for DomRegion {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_hidden(&self, hidden: bool) {
        self.0.set_hidden(hidden);
    }
}

/// Resolves field and region ids against the live document.
#[derive(Clone, Debug)]
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FieldHost for DocumentHost {
    type Field = DomControl;
    type Region = DomRegion;

    fn field(&self, dom_id: &str) -> Option<DomControl> {
        self.document.get_element_by_id(dom_id).and_then(DomControl::from_element)
    }

    fn region(&self, region_id: &str) -> Option<DomRegion> {
        self.document
            .get_element_by_id(region_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomRegion)
    }
}

/// Attach blur and input listeners to every field of `table` present in the
/// document. Missing fields are skipped.
pub fn bind_live_validation<F>(host: &DocumentHost, table: &Rc<RuleTable<F>>)
where
    F: FieldId + 'static,
{
    for field in table.fields() {
        let Some(control) = host.field(field.dom_id()) else {
            tracing::debug!(field = field.dom_id(), "field absent; live validation skipped");
            continue;
        };
        for (name, event) in [("blur", FieldEvent::Blur), ("input", FieldEvent::Input)] {
            let host = host.clone();
            let table = Rc::clone(table);
            listen(control.element(), name, move |_| {
                handle_field_event(&host, field, event, &table);
            });
        }
    }
}
