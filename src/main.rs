#![allow(warnings)]
//! Poultry Admin Frontend Entry Point

mod models;
mod config;
mod commands;
mod tree;
mod context;
mod store;
mod loaders;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = rolling_logger::init_logger("PoultryAdmin", config.log_level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        let _ = rolling_logger::error(&format!("[CONFIG] {}; falling back to defaults", e));
    }
    let _ = rolling_logger::info(&format!("[APP] Starting, API at {}", config.api_base_url));

    mount_to_body(move || view! { <App config=config.clone() /> });
}
