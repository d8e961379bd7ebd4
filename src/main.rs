//! Showcase GUI - Main Entry Point
//!
//! Single-screen cross-platform demo: counter, platform detection, feature grid
//! and theme toggle.

use showcase_gui::app::application::run_app;
use showcase_gui::app::logging::init_tracing;
use showcase_gui::domain::config::AppConfig;
use showcase_gui::utils::config_store::load_config;

fn main() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let _log_guard = init_tracing(&config.logging);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Failed to load config, using defaults");
    }

    tracing::info!("Starting Showcase GUI...");

    // Run the GPUI application
    run_app(config);
}
