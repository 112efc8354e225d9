//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Form visibility only changes through `FormVisibility::reduce`.

use crate::js_bridge;
use dioxus::prelude::*;
use farm_core::form::{FormAction, FormVisibility};
use farm_core::metric::{MetricKind, MetricStore};
use farm_core::record::SubmittedRecord;
use farm_core::seed::Seed;
use farm_core::snapshot::Snapshot;

/// How an open data entry form was closed.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Submit pressed; the record was built from the typed values.
    Submit(SubmittedRecord),
    /// Cancel pressed; no record.
    Cancel,
}

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Metric series shown in the charts
    pub metrics: Signal<MetricStore>,
    /// Weather and sustainability score (None until loaded)
    pub snapshot: Signal<Option<Snapshot>>,
    /// Which data entry form is open
    pub form: Signal<FormVisibility>,
    /// Whether seed data is still loading
    pub loading: Signal<bool>,
    /// Error message if seed data failed to load
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            metrics: Signal::new(MetricStore::default()),
            snapshot: Signal::new(None),
            form: Signal::new(FormVisibility::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Create an AppState that already holds the result of loading seed data.
    pub fn with_seed(seed: anyhow::Result<Seed>) -> Self {
        let mut state = Self::new();
        state.apply_seed(seed);
        state
    }

    /// Store loaded seed data, or the error that prevented loading it.
    pub fn apply_seed(&mut self, seed: anyhow::Result<Seed>) {
        match seed {
            Ok(seed) => {
                self.metrics.set(seed.metrics);
                self.snapshot.set(Some(seed.snapshot));
                self.error_msg.set(None);
            }
            Err(e) => {
                log::error!("Failed to load farm data: {:#}", e);
                self.error_msg.set(Some(format!("Failed to load farm data: {:#}", e)));
            }
        }
        self.loading.set(false);
    }

    pub fn current_form(&self) -> FormVisibility {
        (self.form)()
    }

    fn dispatch(&mut self, action: FormAction) {
        let next = self.current_form().reduce(action);
        self.form.set(next);
    }

    pub fn show_form(&mut self, kind: MetricKind) {
        self.dispatch(FormAction::Show(kind));
    }

    pub fn hide_form(&mut self) {
        self.dispatch(FormAction::Hide);
    }

    /// Close the open form. A submitted record is logged and handed back to
    /// the caller; the state never keeps it.
    pub fn finish_form(&mut self, event: FormEvent) -> Option<SubmittedRecord> {
        self.hide_form();
        match event {
            FormEvent::Submit(record) => {
                js_bridge::log_submission(&record);
                Some(record)
            }
            FormEvent::Cancel => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
