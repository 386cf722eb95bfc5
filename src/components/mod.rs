//! UI Components
//!
//! Reusable Leptos components.

mod appointment_list;
mod appointment_row;
mod search_bar;
mod nav_bar;
mod pages;
mod log_panel;

pub use appointment_list::AppointmentList;
pub use appointment_row::{AppointmentRow, COLUMN_HEADERS};
pub use search_bar::SearchBar;
pub use nav_bar::NavBar;
pub use pages::{AppointmentsPage, MarkdownPage};
pub use log_panel::LogPanel;
