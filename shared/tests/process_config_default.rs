//! Without an explicit `init`, the first read resolves from the build profile.

use pretty_assertions::assert_eq;
use shared::config::{self, BuildProfileFlag, EnvironmentConfigResolver};

#[test]
fn first_read_resolves_from_build_profile() {
    let expected = EnvironmentConfigResolver::new(BuildProfileFlag).resolve();

    assert_eq!(config::resolution(), &expected);
    assert_eq!(*shared::API_BASE_URL, expected.api_base_url.as_str());
    assert_eq!(*shared::API_URL, *shared::API_BASE_URL);
    assert!(config::init(&EnvironmentConfigResolver::default()).is_err());
}
