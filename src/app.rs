//! Clinic Site App
//!
//! Site shell: header navigation, the current page, and the footer.

use std::sync::Arc;

use leptos::prelude::*;
use rolling_logger::LogHistory;

use crate::components::{AppointmentsPage, MarkdownPage, NavBar};
use crate::config::SiteConfig;
use crate::content;
use crate::context::{AppContext, Page};
use crate::services::{data_source_for, BrowserReports, SharedReportService};

#[component]
pub fn App(config: SiteConfig, history: Option<LogHistory>) -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page)));
    provide_context(config.clone());
    if let Some(history) = history {
        provide_context(history);
    }

    // Services are built once and injected into the admin view
    let source = data_source_for(&config);
    let reports: SharedReportService = Arc::new(BrowserReports);
    let clinic_name = config.clinic_name.clone();

    view! {
        <div class="site-layout">
            <NavBar clinic_name=clinic_name.clone() />

            <main class="page-content">
                {move || match page.get() {
                    Page::Home => view! { <MarkdownPage source=content::HOME /> }.into_any(),
                    Page::About => view! { <MarkdownPage source=content::ABOUT /> }.into_any(),
                    Page::Services => view! { <MarkdownPage source=content::SERVICES /> }.into_any(),
                    Page::Contact => view! { <MarkdownPage source=content::CONTACT /> }.into_any(),
                    Page::Appointments => view! {
                        <AppointmentsPage source=source.clone() reports=reports.clone() />
                    }.into_any(),
                }}
            </main>

            <footer class="site-footer">{format!("© {}", clinic_name)}</footer>
        </div>
    }
}
