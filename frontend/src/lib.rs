use log::info;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use shared::config as shared_config;
use shared::EnvironmentConfigResolver;

pub mod api;
pub mod config;

pub use api::api_url;
pub use config::{Config, API_BASE_URL, API_URL};

/// Routes `log` output to the browser console and panics to `console.error`.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
}

/// Freezes the configuration from the build profile.
///
/// Returns the frozen value even when something resolved it before startup.
pub fn init_config() -> shared::Resolution {
    match shared_config::init(&EnvironmentConfigResolver::default()) {
        Ok(resolution) => *resolution,
        Err(err) => {
            info!("{}", err);
            *shared_config::resolution()
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    info!("Logger initialized");

    let resolution = init_config();
    info!(
        "Running in {} mode, API base URL {:?}",
        resolution.environment,
        resolution.api_base_url.as_str()
    );
    Ok(())
}
