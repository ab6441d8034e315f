use super::*;

#[test]
fn data_attribute_prefixes_key() {
    assert_eq!(data_attribute("autosave-interval-ms"), "data-autosave-interval-ms");
}

#[test]
fn millis_from_js_truncates_fraction() {
    assert_eq!(millis_from_js(1_760_000_000_123.9), 1_760_000_000_123);
}

#[test]
fn millis_from_js_clamps_invalid_values() {
    assert_eq!(millis_from_js(f64::NAN), 0);
    assert_eq!(millis_from_js(-5.0), 0);
    assert_eq!(millis_from_js(f64::INFINITY), u64::MAX);
}

#[test]
fn trigger_name_trims() {
    assert_eq!(trigger_name(Some("  ACME Corporation ".into())).as_deref(), Some("ACME Corporation"));
}

#[test]
fn trigger_name_rejects_blank_or_missing() {
    assert_eq!(trigger_name(None), None);
    assert_eq!(trigger_name(Some("   ".into())), None);
}
