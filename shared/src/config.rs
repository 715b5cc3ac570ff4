//! Process-wide API base URL, resolved once from the development flag.
//!
//! Startup code calls [`init`] with an explicit resolver. Code that only needs
//! the value calls [`api_base_url`] or reads [`API_BASE_URL`]; if nothing was
//! initialised, the build profile decides.

pub mod api_base_url;
pub mod environment;
pub mod flag;
pub mod frozen;
pub mod resolver;

use once_cell::sync::Lazy;

pub use api_base_url::{ApiBaseUrl, DEVELOPMENT_API_BASE_URL, PRODUCTION_API_BASE_URL};
pub use environment::Environment;
pub use flag::{BuildProfileFlag, DevFlag, EnvVarFlag, FlagSource, StaticFlag, DEV_FLAG_NAME};
pub use frozen::FrozenConfig;
pub use resolver::{EnvironmentConfigResolver, Resolution};

use crate::error::Result;

/// The configuration shared by the whole process.
pub static PROCESS_CONFIG: FrozenConfig = FrozenConfig::new();

/// The API base URL, read from [`PROCESS_CONFIG`].
pub static API_BASE_URL: Lazy<&'static str> = Lazy::new(|| api_base_url().as_str());

/// Alias of [`API_BASE_URL`] kept for older call sites.
pub static API_URL: Lazy<&'static str> = Lazy::new(|| *API_BASE_URL);

/// Freezes the process configuration with an explicit resolver.
pub fn init(resolver: &EnvironmentConfigResolver) -> Result<&'static Resolution> {
    PROCESS_CONFIG.freeze(resolver)
}

pub fn resolution() -> &'static Resolution {
    PROCESS_CONFIG.get_or_freeze(EnvironmentConfigResolver::default)
}

pub fn api_base_url() -> ApiBaseUrl {
    resolution().api_base_url
}

pub fn environment() -> Environment {
    resolution().environment
}
