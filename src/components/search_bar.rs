//! Search Bar Component
//!
//! Free-text search input; every keystroke replaces the query.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = "Search by name, email, phone, type, status or service...".to_string())]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
