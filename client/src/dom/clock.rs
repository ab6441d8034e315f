//! Save-time labels from the browser's own locale formatting.

use formkeeper::clock::Clock;
use wasm_bindgen::JsValue;

const LOCALE: &str = "fr-FR";

/// [`Clock`] backed by `Date.prototype.toLocale*String("fr-FR")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn date_label(&self) -> String {
        js_sys::Date::new_0().to_locale_date_string(LOCALE, &JsValue::UNDEFINED).into()
    }

    fn time_label(&self) -> String {
        js_sys::Date::new_0().to_locale_time_string(LOCALE).into()
    }
}
