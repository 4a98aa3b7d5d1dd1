//! Event wiring between the form, the record store, and the rendered view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page drives three events: load, form submit, and per-row delete. Each
//! handler runs to completion on the UI thread, so a store read-modify-write
//! never interleaves with another.

use records::{RawInput, RecordStore, Storage, VolunteerRecord, validate};

use crate::state::log_view::LogView;
use crate::util::local_storage::BrowserStorage;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Bound form values. Reset by clearing every field.
pub type FormFields = RawInput;

/// Controller used by the mounted app.
pub type AppController = LogController<BrowserStorage>;

/// Result of handling a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Nothing changed; the message lists every violated rule.
    Rejected(String),
}

#[derive(Debug)]
pub struct LogController<S> {
    store: RecordStore<S>,
    view: LogView,
}

impl<S: Storage> LogController<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self { store, view: LogView::default() }
    }

    #[must_use]
    pub fn view(&self) -> &LogView {
        &self.view
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Page load: read the stored collection and render every row.
    pub fn on_load(&mut self) {
        let records = self.store.load();
        log::info!("volunteer log loaded: entries={}", records.len());
        let total = self.store.total_hours();
        self.view.render_all(records, total);
    }

    /// Form submit: validate, persist, render the new row and total, reset.
    pub fn on_submit(&mut self, fields: &mut FormFields) -> SubmitOutcome {
        let valid = match validate(fields) {
            Ok(valid) => valid,
            Err(errors) => {
                log::debug!("submission rejected: {errors}");
                return SubmitOutcome::Rejected(errors.message());
            }
        };

        let record = VolunteerRecord::from_validated(&valid);
        if let Err(e) = self.store.append(record.clone()) {
            log::warn!("volunteer log append failed: {e}");
        }
        self.view.render_row(record);
        self.view.render_total(self.store.total_hours());
        fields.clear();
        SubmitOutcome::Accepted
    }

    /// Row delete: drop matching rows from the view, then from storage.
    pub fn on_delete(&mut self, record: &VolunteerRecord) {
        let shown = self.view.remove_rows_matching(record);
        match self.store.remove(record) {
            Ok(removed) => log::debug!("volunteer log delete: rows={shown} stored={removed}"),
            Err(e) => log::warn!("volunteer log delete failed: {e}"),
        }
        self.view.render_total(self.store.total_hours());
    }
}
