//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn NavBar(clinic_name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="site-header">
            <button class="brand" on:click=move |_| ctx.navigate(Page::Home)>
                {clinic_name}
            </button>
            <nav class="site-nav">
                {Page::ALL.into_iter().map(|target| {
                    view! {
                        <button
                            class="nav-link"
                            class:active=move || ctx.page.get() == target
                            on:click=move |_| ctx.navigate(target)
                        >
                            {target.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
