//! Form controls and forms over `web-sys` element types.
//!
//! One [`DomControl`] serves both sides of the core: draft capture/apply
//! ([`FormControl`]) and live validation ([`ValidatedField`]). Elements that
//! carry no value (fieldsets, outputs, buttons) are filtered out when the form
//! is walked.

use formkeeper::snapshot::{ControlKind, FormControl, FormHandle};
use formkeeper::validation::{ValidatedField, Validity};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// A value-carrying form control.
#[derive(Clone, Debug)]
pub enum DomControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl DomControl {
    /// Narrow a generic element; `None` for anything that is not an input,
    /// select or textarea.
    pub fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(other) => other,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(other) => other,
        };
        element.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea)
    }

    /// The underlying element, for listeners and focus.
    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => &**el,
            Self::Select(el) => &**el,
            Self::TextArea(el) => &**el,
        }
    }

    fn validity_state(&self) -> web_sys::ValidityState {
        match self {
            Self::Input(el) => el.validity(),
            Self::Select(el) => el.validity(),
            Self::TextArea(el) => el.validity(),
        }
    }
}

impl FormControl for DomControl {
    fn name(&self) -> Option<String> {
        let name = match self {
            Self::Input(el) => el.name(),
            Self::Select(el) => el.name(),
            Self::TextArea(el) => el.name(),
        };
        (!name.is_empty()).then_some(name)
    }

    fn kind(&self) -> ControlKind {
        match self {
            Self::Input(el) => ControlKind::from_input_type(&el.type_()),
            Self::Select(_) => ControlKind::Select,
            Self::TextArea(_) => ControlKind::TextArea,
        }
    }

    fn is_disabled(&self) -> bool {
        match self {
            Self::Input(el) => el.disabled(),
            Self::Select(el) => el.disabled(),
            Self::TextArea(el) => el.disabled(),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn is_checked(&self) -> bool {
        match self {
            Self::Input(el) => el.checked(),
            Self::Select(_) | Self::TextArea(_) => false,
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::Select(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }

    fn set_checked(&self, checked: bool) {
        if let Self::Input(el) = self {
            el.set_checked(checked);
        }
    }
}

impl ValidatedField for DomControl {
    fn dom_id(&self) -> String {
        self.element().id()
    }

    fn validity(&self) -> Validity {
        let state = self.validity_state();
        Validity {
            value_missing: state.value_missing(),
            type_mismatch: state.type_mismatch(),
            pattern_mismatch: state.pattern_mismatch(),
            range_underflow: state.range_underflow(),
            range_overflow: state.range_overflow(),
            step_mismatch: state.step_mismatch(),
            too_short: state.too_short(),
            too_long: state.too_long(),
            bad_input: state.bad_input(),
            custom_error: state.custom_error(),
        }
    }

    fn validation_message(&self) -> String {
        let message = match self {
            Self::Input(el) => el.validation_message(),
            Self::Select(el) => el.validation_message(),
            Self::TextArea(el) => el.validation_message(),
        };
        message.unwrap_or_default()
    }

    fn has_class(&self, class: &str) -> bool {
        self.element().class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.element().class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.element().class_list().remove_1(class);
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.element().set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.element().remove_attribute(name);
    }

    fn focus(&self) {
        let _ = self.element().focus();
    }
}

/// A `<form>` walked for its value-carrying controls.
#[derive(Clone, Debug)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    /// Form with `id`, if present and actually a `<form>`.
    pub fn by_id(id: &str) -> Option<Self> {
        let form = super::element_by_id(id)?.dyn_into::<HtmlFormElement>().ok()?;
        Some(Self { form })
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Native `form.reset()`.
    pub fn reset(&self) {
        self.form.reset();
    }
}

impl FormHandle for DomForm {
    type Control = DomControl;

    fn controls(&self) -> Vec<DomControl> {
        let elements = self.form.elements();
        (0..elements.length())
            .filter_map(|i| elements.item(i))
            .filter_map(DomControl::from_element)
            .collect()
    }
}
