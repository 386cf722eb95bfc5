//! Appointments View State
//!
//! Uses Leptos reactive_stores for field-level reactivity: the filtered list
//! depends only on `records` and `query`, not on the fetch bookkeeping.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::DataError;
use crate::models::AppointmentRecord;
use crate::search::filter_records;
use crate::services::{fetch_appointments, DataSource};

pub const FETCH_ERROR_PREFIX: &str = "Failed to fetch appointments: ";
pub const LOADING_MESSAGE: &str = "Loading appointments...";
pub const NO_APPOINTMENTS: &str = "No appointments found.";
pub const NO_MATCHES: &str = "No appointments found matching your search.";

/// Top-level render state; exactly one holds at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

impl Phase {
    pub fn derive(loading: bool, has_error: bool) -> Self {
        if loading {
            Phase::Loading
        } else if has_error {
            Phase::Error
        } else {
            Phase::Ready
        }
    }
}

/// State owned by one mounted appointment list
#[derive(Clone, Debug, Default, Store)]
pub struct AppointmentsState {
    /// Snapshot from the last fetch, in store order
    pub records: Vec<AppointmentRecord>,
    /// Free-text search box contents
    pub query: String,
    /// True until the fetch settles
    pub loading: bool,
    /// Present only after a failed fetch
    pub error: Option<String>,
}

impl AppointmentsState {
    /// State at mount time: loading, nothing fetched
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Apply a fetch outcome; the loading flag is cleared either way
    pub fn settle(&mut self, outcome: Result<Vec<AppointmentRecord>, DataError>) {
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(err) => self.error = Some(fetch_error_message(&err)),
        }
        self.loading = false;
    }
}

pub fn fetch_error_message(err: &DataError) -> String {
    format!("{}{}", FETCH_ERROR_PREFIX, err)
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Failed(String),
    /// No rows; the message depends on whether a search is active
    Empty(&'static str),
    Rows(Vec<AppointmentRecord>),
}

/// Pure render decision over phase, error, query and the filtered rows
///
/// The empty message keys off the query alone, so an empty store searched with
/// a non-empty query reports "no match".
pub fn list_view(phase: Phase, error: Option<&str>, query: &str, filtered: Vec<AppointmentRecord>) -> ListView {
    match phase {
        Phase::Loading => ListView::Loading,
        Phase::Error => ListView::Failed(error.unwrap_or_default().to_string()),
        Phase::Ready if filtered.is_empty() => {
            ListView::Empty(if query.is_empty() { NO_APPOINTMENTS } else { NO_MATCHES })
        }
        Phase::Ready => ListView::Rows(filtered),
    }
}

/// Liveness flag for one mount; released on cleanup so late fetch results are dropped
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppointmentsStore = Store<AppointmentsState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a settled fetch unless the owning view is gone; returns whether it was applied
pub fn store_settle(
    store: &AppointmentsStore,
    guard: &MountGuard,
    outcome: Result<Vec<AppointmentRecord>, DataError>,
) -> bool {
    if !guard.is_live() {
        return false;
    }
    store.update(|state| state.settle(outcome));
    true
}

/// Fetch the appointments collection once and settle the store with the outcome
pub async fn load_appointments(store: AppointmentsStore, guard: MountGuard, source: &dyn DataSource) -> bool {
    let outcome = fetch_appointments(source).await;
    match &outcome {
        Ok(records) => tracing::info!(count = records.len(), "loaded appointments"),
        Err(e) => tracing::warn!(error = %e, "appointments fetch failed"),
    }
    let applied = store_settle(&store, &guard, outcome);
    if !applied {
        tracing::debug!("list unmounted before fetch settled; result dropped");
    }
    applied
}

pub fn store_phase(store: &AppointmentsStore) -> Phase {
    Phase::derive(store.loading().get(), store.error().get().is_some())
}

/// Records matching the current query (tracks only `records` and `query`)
pub fn store_filtered(store: &AppointmentsStore) -> Vec<AppointmentRecord> {
    filter_records(&store.records().get(), &store.query().get())
}

pub fn store_list_view(store: &AppointmentsStore, phase: Phase, filtered: Vec<AppointmentRecord>) -> ListView {
    list_view(phase, store.error().get().as_deref(), &store.query().get(), filtered)
}
