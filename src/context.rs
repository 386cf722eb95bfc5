//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level pages (no router; the shell switches on this)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
    Appointments,
}

impl Page {
    /// Navigation order
    pub const ALL: [Page; 5] = [Page::Home, Page::About, Page::Services, Page::Contact, Page::Appointments];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Contact => "Contact",
            Page::Appointments => "Appointments",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the visible page
    pub fn navigate(&self, page: Page) {
        tracing::debug!(page = page.label(), "navigate");
        self.set_page.set(page);
    }
}
