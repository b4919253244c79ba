//! Rack Heatmap Frontend Entry Point

mod app;
mod color;
mod components;
mod config;
mod logging;
mod models;
mod state;
mod store;

use app::App;
use config::DemoConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = DemoConfig::from_document();
    let config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => DemoConfig::default(),
    };
    logging::init(config.log_level);
    if let Some(Err(err)) = loaded {
        log::warn!("{}, using defaults", err);
    }
    log::info!("mounting rack page");

    mount_to_body(move || view! { <App config=config /> });
}
