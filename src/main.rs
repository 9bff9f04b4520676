//! Chat front end entry point
//!
//! Web: `dx serve --platform web`. Desktop: `dx serve --platform desktop`
//! (or `cargo run --features desktop -- --help` for the options).

use chat_router::app::App;
use chat_router::app::route_table::{leaf_paths, validate_routes, ROUTES};
use chat_router::config::AppConfig;
use chat_router::shared::logging;

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use chat_router::config::Cli;
    use clap::Parser;

    let cli = Cli::parse();

    // Initialize tracing BEFORE dioxus::launch
    logging::init(&cli.log_filter);

    validate_routes(ROUTES)?;

    let config = AppConfig::from(&cli);
    logging::log_startup(&config.title, leaf_paths(ROUTES).len());
    config.install()?;

    dioxus::launch(App);
    Ok(())
}

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] chat-router initialized".into());

    if let Err(e) = validate_routes(ROUTES) {
        web_sys::console::error_1(&format!("[WASM] invalid route table: {e}").into());
    }
    logging::log_startup(&AppConfig::current().title, leaf_paths(ROUTES).len());

    dioxus::launch(App);
}
