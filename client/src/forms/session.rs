//! Draft session for one intake form: restore, manual save, auto-save and
//! the cancel guard.
//!
//! DESIGN
//! ======
//! The saver lives in one `Rc<RefCell<_>>` shared by the save button, the
//! periodic `Interval` and the debounce `Timeout`. The debounce keeps a single
//! owned `Timeout`; assigning a new one drops (and so cancels) the previous
//! timer, while the core `Debouncer` tracks the matching deadline.
//!
//! TRADE-OFFS
//! ==========
//! Periodic and debounced saves are not coordinated. Whichever runs last
//! overwrites the slot, which is harmless because both capture the live form.

use std::cell::RefCell;
use std::rc::Rc;

use formkeeper::autosave::AutoSaver;
use formkeeper::clock::Clock;
use formkeeper::config::{AutoSaveConfig, FormConfig};
use formkeeper::draft::DraftStore;
use formkeeper::guard::ExitGuard;
use formkeeper::snapshot::{Snapshot, apply_snapshot};
use gloo_timers::callback::{Interval, Timeout};
use web_sys::Document;

use crate::dom::badge::BadgeSink;
use crate::dom::browser::{LocationNavigator, WindowConfirmer};
use crate::dom::clock::BrowserClock;
use crate::dom::control::DomForm;
use crate::dom::notice::{SaveNotice, show_restore_banner};
use crate::dom::storage::LocalStorage;
use crate::dom::{data_lookup, element_by_id, listen, now_ms};

type PageSaver = AutoSaver<LocalStorage, BrowserClock, BadgeSink>;

/// Live draft machinery attached to a form.
pub struct DraftSession {
    form: DomForm,
    saver: Rc<RefCell<PageSaver>>,
    guard: ExitGuard<LocalStorage, BrowserClock>,
    debounce: Rc<RefCell<Option<Timeout>>>,
}

impl DraftSession {
    /// Restore any stored draft into `form`, hand it to `after_restore`, then
    /// wire every save trigger and the cancel button. `None` when
    /// `localStorage` is unavailable.
    pub fn mount<R>(document: &Document, form: &DomForm, config: FormConfig, after_restore: R) -> Option<Rc<Self>>
    where
        R: FnOnce(&Snapshot),
    {
        let Some(store) = LocalStorage::open() else {
            tracing::warn!(form = config.form_id, "no localStorage; drafts disabled");
            return None;
        };
        let drafts = DraftStore::new(store, BrowserClock);
        let timing = AutoSaveConfig::from_lookup(data_lookup(form.element()));

        if let Some(snapshot) = drafts.read(config.draft_key) {
            let applied = apply_snapshot(form, &snapshot);
            show_restore_banner(document, form.element(), snapshot.saved_at());
            after_restore(&snapshot);
            tracing::info!(key = %config.draft_key, applied, "draft restored");
        }

        let sink = BadgeSink::for_page(timing.status_reset_ms);
        let saver = AutoSaver::new(drafts.clone(), config.draft_key, sink, timing);
        let session = Rc::new(Self {
            form: form.clone(),
            saver: Rc::new(RefCell::new(saver)),
            guard: ExitGuard::new(drafts, config.draft_key, config.redirect_url),
            debounce: Rc::new(RefCell::new(None)),
        });

        session.bind_manual_save(config, timing);
        session.start_periodic(timing);
        session.bind_debounce(timing);
        session.bind_cancel(config);
        Some(session)
    }

    fn bind_manual_save(self: &Rc<Self>, config: FormConfig, timing: AutoSaveConfig) {
        let Some(button) = element_by_id(config.save_button_id) else {
            return;
        };
        let notice = SaveNotice::new(timing.notice_clear_ms);
        let session = Rc::clone(self);
        let anchor = button.clone();
        listen(&button, "click", move |_| {
            let outcome = session.saver.borrow().save_manual(&session.form);
            if outcome.is_saved() {
                notice.show(&anchor, &BrowserClock.time_label());
            }
        });
    }

    fn start_periodic(self: &Rc<Self>, timing: AutoSaveConfig) {
        let session = Rc::clone(self);
        Interval::new(millis_u32(timing.interval_ms), move || {
            session.saver.borrow().save_periodic(&session.form);
        })
        .forget();
    }

    fn bind_debounce(self: &Rc<Self>, timing: AutoSaveConfig) {
        let session = Rc::clone(self);
        let delay = millis_u32(timing.debounce_ms);
        listen(self.form.element(), "input", move |_| {
            session.saver.borrow_mut().note_input_at(now_ms());
            let due = Rc::clone(&session);
            let timer = Timeout::new(delay, move || {
                due.saver.borrow_mut().fire_pending(&due.form);
            });
            *session.debounce.borrow_mut() = Some(timer);
        });
    }

    fn bind_cancel(self: &Rc<Self>, config: FormConfig) {
        let Some(button) = element_by_id(config.cancel_button_id) else {
            return;
        };
        let session = Rc::clone(self);
        listen(&button, "click", move |event| {
            let decision = session.guard.on_cancel(&WindowConfirmer, &LocationNavigator);
            if decision.suppresses_default() {
                event.prevent_default();
            }
        });
    }

    /// Submission accepted: drop any pending debounced save, clear the
    /// draft and leave for the list page.
    pub fn finish(&self) {
        self.saver.borrow_mut().cancel_pending();
        self.debounce.borrow_mut().take();
        self.guard.on_submitted(&LocationNavigator);
    }
}

fn millis_u32(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}
