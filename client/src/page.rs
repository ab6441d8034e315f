//! Browser-independent helpers shared by the DOM adapters.
//!
//! Kept outside the `hydrate` gate so host tests can exercise the
//! conversions the wasm build relies on.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Attribute prefix for per-form overrides read by
/// [`formkeeper::config::AutoSaveConfig::from_lookup`].
pub const DATA_PREFIX: &str = "data-";

/// Attribute stamped on the delete modal while a removal is pending.
pub const PENDING_NAME_ATTR: &str = "data-nom-courant";

/// Attribute name carrying the override `key`.
#[must_use]
pub fn data_attribute(key: &str) -> String {
    format!("{DATA_PREFIX}{key}")
}

/// Convert a JS millisecond timestamp to the debouncer's clock.
///
/// `Date.now()` is an `f64`; NaN and negatives collapse to zero and values
/// beyond `u64` saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn millis_from_js(raw: f64) -> u64 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    if raw >= u64::MAX as f64 {
        return u64::MAX;
    }
    raw as u64
}

/// Entity name carried by a delete trigger's `data-nom`.
///
/// Absent or whitespace-only values count as no name.
#[must_use]
pub fn trigger_name(raw: Option<String>) -> Option<String> {
    raw.map(|name| name.trim().to_owned()).filter(|name| !name.is_empty())
}
