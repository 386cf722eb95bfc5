#![allow(warnings)]
//! Clinic Site Frontend Entry Point

mod models;
mod error;
mod config;
mod search;
mod format;
mod store;
mod services;
mod context;
mod markdown;
mod content;
mod components;
mod app;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_problem) = SiteConfig::from_window();
    let history = match rolling_logger::init(&config.log_level, config.log_history) {
        Ok(history) => Some(history),
        Err(e) => {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
            None
        }
    };
    if let Some(problem) = config_problem {
        tracing::warn!("{}", problem);
    }
    tracing::info!(clinic = %config.clinic_name, "starting clinic site");

    mount_to_body(move || view! { <App config=config history=history /> });
}
