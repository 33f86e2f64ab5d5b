//! Fleet Maintenance Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod context;
mod form_state;
mod submission;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("[APP] Starting fleet maintenance UI");

    mount_to_body(move || view! { <App config=config /> });
}
