//! `window.confirm` and `window.location` behind the guard's traits.

use formkeeper::guard::{Confirmer, Navigator};

/// Blocking `window.confirm`. Answers "no" when no window is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowConfirmer;

impl Confirmer for WindowConfirmer {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or(false)
    }
}

/// Navigation by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            tracing::warn!(url, error = ?err, "navigation failed");
        }
    }
}
