use shared::config::{self, Environment};
use wasm_bindgen::prelude::*;

pub use shared::config::{API_BASE_URL, API_URL};

pub struct Config;

impl Config {
    /// Base URL for API requests.
    ///
    /// Debug builds served by Trunk talk to the backend on localhost:8000.
    /// Release builds are served by the backend itself, so the base is empty
    /// and requests stay on the page's origin.
    pub fn api_base_url() -> String {
        config::api_base_url().as_str().to_string()
    }

    pub fn environment() -> Environment {
        config::environment()
    }

    pub fn is_development() -> bool {
        Config::environment().is_development()
    }
}

#[wasm_bindgen]
pub fn get_api_base_url() -> String {
    Config::api_base_url()
}

#[wasm_bindgen]
pub fn get_environment() -> String {
    Config::environment().to_string()
}

/// Resolved configuration as a JSON string
#[wasm_bindgen]
pub fn get_config_metadata() -> String {
    serde_json::to_string(config::resolution()).unwrap_or_else(|err| {
        log::error!("Failed to serialize configuration metadata: {}", err);
        "{}".to_string()
    })
}
