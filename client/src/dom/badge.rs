//! Header draft badge as a [`StatusSink`].
//!
//! The badge shows the saver's progress and falls back to idle a short while
//! after a successful save. Only one revert is ever pending: a newer status
//! drops the older timer.

use std::cell::RefCell;
use std::rc::Rc;

use formkeeper::status::{BADGE_SELECTOR, SaveStatus, StatusSink, badge_view, reverts_to_idle};
use gloo_timers::callback::Timeout;
use web_sys::Element;

#[derive(Clone)]
pub struct BadgeSink {
    badge: Option<Element>,
    reset_ms: u32,
    revert: Rc<RefCell<Option<Timeout>>>,
}

impl BadgeSink {
    /// Sink for the page's `[data-badge-brouillon]` element. Pages without a
    /// badge get a sink that ignores every status.
    pub fn for_page(reset_ms: u64) -> Self {
        let badge = super::document().and_then(|d| d.query_selector(BADGE_SELECTOR).ok().flatten());
        Self {
            badge,
            reset_ms: u32::try_from(reset_ms).unwrap_or(u32::MAX),
            revert: Rc::new(RefCell::new(None)),
        }
    }
}

fn paint(badge: &Element, status: SaveStatus) {
    let view = badge_view(status);
    badge.set_text_content(Some(view.text));
    badge.set_class_name(view.class_name);
}

impl StatusSink for BadgeSink {
    fn notify(&self, status: SaveStatus) {
        let Some(badge) = self.badge.as_ref() else {
            return;
        };
        paint(badge, status);
        self.revert.borrow_mut().take();
        if reverts_to_idle(status) {
            let badge = badge.clone();
            let timer = Timeout::new(self.reset_ms, move || paint(&badge, SaveStatus::Idle));
            *self.revert.borrow_mut() = Some(timer);
        }
    }
}
