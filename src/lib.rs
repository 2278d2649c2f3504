use wasm_bindgen::prelude::*;

#[macro_use]
pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

use crate::domain::logging::{LogComponent, LogLevel};

/// Boot the page: panic hook, config, logger, clock, then mount the app
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (loaded, config_error) = config::AppConfig::load();
    let config = config::init_config(loaded);
    let min_level = config.min_log_level().unwrap_or(LogLevel::Debug);

    domain::logging::init_logger(Box::new(app::LeptosLogger::new(min_level, config.max_log_lines)));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    if let Some(e) = config_error {
        log_warn!(LogComponent::Presentation("Initialize"), "{}; using defaults", e);
    }
    log_info!(
        LogComponent::Presentation("Initialize"),
        "portfolio tracker ready (currency {}, prices {}-{})",
        config.currency,
        config.price_floor,
        config.price_floor + config.price_span
    );

    leptos::mount_to_body(app::App);
}
