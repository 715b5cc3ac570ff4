use shared::config;

/// Builds the URL for an API path against the resolved base URL.
pub fn api_url(path: &str) -> String {
    config::api_base_url().join(path)
}
