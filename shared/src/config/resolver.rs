use log::{debug, warn};
use serde::Serialize;

use super::api_base_url::ApiBaseUrl;
use super::environment::Environment;
use super::flag::{BuildProfileFlag, DevFlag, FlagSource, StaticFlag};

/// Outcome of reading the development flag once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub environment: Environment,
    pub api_base_url: ApiBaseUrl,
    /// Set when the flag was absent or unreadable and production was assumed.
    pub fell_back: bool,
}

impl Resolution {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            api_base_url: ApiBaseUrl::for_environment(environment),
            fell_back: false,
        }
    }
}

/// Turns a development flag into an environment and its API base URL.
pub struct EnvironmentConfigResolver {
    source: Box<dyn FlagSource>,
}

impl EnvironmentConfigResolver {
    pub fn new(source: impl FlagSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn from_flag(is_development: bool) -> Self {
        Self::new(StaticFlag(is_development))
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Never fails: an absent or indeterminate flag resolves to production.
    pub fn resolve(&self) -> Resolution {
        let resolution = match self.source.read() {
            DevFlag::Set(is_development) => {
                Resolution::for_environment(Environment::from_dev_flag(is_development))
            }
            DevFlag::Indeterminate(raw) => {
                warn!(
                    "Development flag from {} has unrecognised value {:?}, assuming production",
                    self.source.describe(),
                    raw
                );
                Self::fallback()
            }
            DevFlag::Absent => {
                warn!(
                    "Development flag from {} is not set, assuming production",
                    self.source.describe()
                );
                Self::fallback()
            }
        };

        debug!(
            "Resolved {} environment, API base URL {:?}",
            resolution.environment, resolution.api_base_url.as_str()
        );
        resolution
    }

    fn fallback() -> Resolution {
        Resolution {
            fell_back: true,
            ..Resolution::for_environment(Environment::Production)
        }
    }
}

impl Default for EnvironmentConfigResolver {
    fn default() -> Self {
        Self::new(BuildProfileFlag)
    }
}

impl std::fmt::Debug for EnvironmentConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentConfigResolver")
            .field("source", &self.source.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::flag::EnvVarFlag;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    struct FixedReading(DevFlag);

    impl FlagSource for FixedReading {
        fn read(&self) -> DevFlag {
            self.0.clone()
        }

        fn describe(&self) -> String {
            "fixed reading".to_string()
        }
    }

    #[test_log::test]
    fn test_development_flag_true() {
        let resolution = EnvironmentConfigResolver::from_flag(true).resolve();
        assert_eq!(resolution.environment, Environment::Development);
        assert_eq!(resolution.api_base_url.as_str(), "http://localhost:8000");
        assert!(!resolution.fell_back);
    }

    #[test_log::test]
    fn test_development_flag_false() {
        let resolution = EnvironmentConfigResolver::from_flag(false).resolve();
        assert_eq!(resolution.environment, Environment::Production);
        assert_eq!(resolution.api_base_url.as_str(), "");
        assert!(!resolution.fell_back);
    }

    #[test_log::test]
    fn test_indeterminate_flag_falls_back_to_production() {
        let resolver =
            EnvironmentConfigResolver::new(FixedReading(DevFlag::Indeterminate("maybe".into())));
        let resolution = resolver.resolve();
        assert_eq!(resolution.environment, Environment::Production);
        assert_eq!(resolution.api_base_url.as_str(), "");
        assert!(resolution.fell_back);
    }

    #[test_log::test]
    fn test_absent_env_var_falls_back_to_production() {
        let resolver =
            EnvironmentConfigResolver::new(EnvVarFlag::new("SHARED_RESOLVER_TEST_NEVER_SET"));
        let resolution = resolver.resolve();
        assert_eq!(resolution.api_base_url, ApiBaseUrl::PRODUCTION);
        assert!(resolution.fell_back);
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let resolver = EnvironmentConfigResolver::from_flag(true);
        let first = resolver.resolve();
        for _ in 0..10 {
            assert_eq!(resolver.resolve(), first);
        }
    }

    #[test]
    fn test_debug_names_source() {
        let resolver = EnvironmentConfigResolver::from_flag(false);
        assert_eq!(
            format!("{:?}", resolver),
            "EnvironmentConfigResolver { source: \"static flag (false)\" }"
        );
    }

    proptest! {
        #[test]
        fn any_raw_flag_resolves_to_one_of_two_urls(raw in ".*") {
            let resolution = EnvironmentConfigResolver::new(FixedReading(DevFlag::parse(&raw))).resolve();
            let url = resolution.api_base_url.as_str();
            prop_assert!(url == "http://localhost:8000" || url.is_empty());
            prop_assert_eq!(
                resolution.environment == Environment::Development,
                url == "http://localhost:8000"
            );
        }
    }
}
