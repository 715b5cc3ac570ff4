use std::fmt;

use serde::{Serialize, Serializer};

use super::environment::Environment;

/// Base URL of the local development backend.
pub const DEVELOPMENT_API_BASE_URL: &str = "http://localhost:8000";

/// Empty base: requests go to the origin that served the page.
pub const PRODUCTION_API_BASE_URL: &str = "";

/// Base URL the HTTP client should target. Only the two literals above are
/// constructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiBaseUrl(&'static str);

impl ApiBaseUrl {
    pub const DEVELOPMENT: ApiBaseUrl = ApiBaseUrl(DEVELOPMENT_API_BASE_URL);
    pub const PRODUCTION: ApiBaseUrl = ApiBaseUrl(PRODUCTION_API_BASE_URL);

    pub const fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::DEVELOPMENT,
            Environment::Production => Self::PRODUCTION,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_same_origin(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the URL for an API path.
    ///
    /// A same-origin base leaves `path` relative. Otherwise the base is
    /// prefixed, with a `/` inserted if `path` does not start with one.
    pub fn join(&self, path: &str) -> String {
        if self.is_same_origin() {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Serialize for ApiBaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
