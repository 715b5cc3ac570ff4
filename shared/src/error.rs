use thiserror::Error;

use crate::config::Environment;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Configuration already frozen for the {current} environment")]
    AlreadyFrozen { current: Environment },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
