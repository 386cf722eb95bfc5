//! Page Components
//!
//! Static marketing pages and the admin appointments page.

use leptos::prelude::*;
use rolling_logger::LogHistory;

use crate::components::{AppointmentList, LogPanel};
use crate::markdown::render_markdown;
use crate::services::{SharedDataSource, SharedReportService};

/// Static page rendered from markdown copy
#[component]
pub fn MarkdownPage(source: &'static str) -> impl IntoView {
    let html = render_markdown(source);
    view! { <article class="markdown-page" inner_html=html></article> }
}

/// Read-only appointments listing for clinic staff
#[component]
pub fn AppointmentsPage(source: SharedDataSource, reports: SharedReportService) -> impl IntoView {
    let history = use_context::<LogHistory>();

    view! {
        <section class="admin-page">
            <h1>"Appointments"</h1>
            <AppointmentList source=source reports=reports />
            {history.map(|history| view! { <LogPanel history=history /> })}
        </section>
    }
}
