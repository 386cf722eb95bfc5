//! Appointment List Component
//!
//! Fetches the appointments collection once per mount and shows a live
//! search-filtered table, or a loading, error or empty message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AppointmentRow, SearchBar, COLUMN_HEADERS};
use crate::config::SiteConfig;
use crate::format::RowView;
use crate::services::{appointments_report, SharedDataSource, SharedReportService};
use crate::store::{
    load_appointments, store_filtered, store_list_view, store_phase, AppointmentsState,
    AppointmentsStateStoreFields, ListView, MountGuard, Phase, LOADING_MESSAGE,
};

#[component]
pub fn AppointmentList(source: SharedDataSource, reports: SharedReportService) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig should be provided");
    let date_style = config.date_style();

    let state = Store::new(AppointmentsState::new());
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    // Initial load (no tracked reads, so this runs once per mount)
    Effect::new(move |_| {
        let source = source.clone();
        let guard = guard.clone();
        spawn_local(async move {
            load_appointments(state, guard, source.as_ref()).await;
        });
    });

    let phase = Memo::new(move |_| store_phase(&state));
    let filtered = Memo::new(move |_| store_filtered(&state));
    let rows = Memo::new(move |_| {
        filtered
            .get()
            .iter()
            .map(|record| RowView::from_record(record, &date_style))
            .collect::<Vec<_>>()
    });

    // Message to show instead of the table (None while rows are shown)
    let status = Memo::new(move |_| {
        match store_list_view(&state, phase.get(), filtered.get()) {
            ListView::Rows(_) => None,
            other => Some(other),
        }
    });

    let (report_error, set_report_error) = signal::<Option<String>>(None);
    let on_print = {
        let reports = reports.clone();
        move |_| {
            let spec = appointments_report(&rows.get_untracked(), &state.query().get_untracked());
            let result = reports.generate_print(&spec);
            if let Err(e) = &result {
                tracing::warn!(error = %e, "print failed");
            }
            set_report_error.set(result.err().map(|e| e.to_string()));
        }
    };
    let on_export = move |_| {
        let spec = appointments_report(&rows.get_untracked(), &state.query().get_untracked());
        let result = reports.generate_pdf(&spec);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "PDF export failed");
        }
        set_report_error.set(result.err().map(|e| e.to_string()));
    };

    view! {
        <div class="appointment-list">
            <SearchBar
                query=Signal::derive(move || state.query().get())
                on_change=move |query: String| state.query().set(query)
            />

            <Show when=move || phase.get() == Phase::Ready>
                <div class="list-toolbar">
                    <span class="list-count">
                        {move || format!("{} of {} appointments", filtered.get().len(), state.records().get().len())}
                    </span>
                    <button class="report-btn" on:click=on_print.clone()>"Print"</button>
                    <button class="report-btn" on:click=on_export.clone()>"Export PDF"</button>
                    {move || report_error.get().map(|e| view! { <span class="report-error">{e}</span> })}
                </div>
            </Show>

            {move || match status.get() {
                Some(ListView::Loading) => view! {
                    <p class="list-status loading">{LOADING_MESSAGE}</p>
                }.into_any(),
                Some(ListView::Failed(message)) => view! {
                    <p class="list-status error" role="alert">{message}</p>
                }.into_any(),
                Some(ListView::Empty(message)) => view! {
                    <table class="appointments-table">
                        <TableHead />
                        <tbody>
                            <tr class="list-status empty">
                                <td colspan={COLUMN_HEADERS.len().to_string()}>{message}</td>
                            </tr>
                        </tbody>
                    </table>
                }.into_any(),
                Some(ListView::Rows(_)) | None => view! {
                    <table class="appointments-table">
                        <TableHead />
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|row| row.id.clone()
                                children=move |row| view! { <AppointmentRow row=row /> }
                            />
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TableHead() -> impl IntoView {
    view! {
        <thead>
            <tr>
                {COLUMN_HEADERS.into_iter().map(|header| view! { <th>{header}</th> }).collect_view()}
            </tr>
        </thead>
    }
}
