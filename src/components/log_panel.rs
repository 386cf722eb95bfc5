//! Log Panel Component
//!
//! Collapsible view of the rolling log history for troubleshooting fetches.

use leptos::prelude::*;
use rolling_logger::LogHistory;

#[component]
pub fn LogPanel(history: LogHistory) -> impl IntoView {
    let (lines, set_lines) = signal(history.snapshot());
    let refresh = move |_| set_lines.set(history.snapshot());

    view! {
        <details class="log-panel">
            <summary>"Activity log"</summary>
            <button class="log-refresh" on:click=refresh>"Refresh"</button>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
