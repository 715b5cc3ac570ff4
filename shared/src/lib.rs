pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{
    ApiBaseUrl, DevFlag, Environment, EnvironmentConfigResolver, FlagSource, FrozenConfig,
    Resolution, API_BASE_URL, API_URL,
};
pub use error::{ConfigError, Result};
