use log::info;
use once_cell::sync::OnceCell;

use super::resolver::{EnvironmentConfigResolver, Resolution};
use crate::error::{ConfigError, Result};

/// Write-once holder for a resolved configuration.
///
/// The first successful resolution wins and stays for the lifetime of the
/// holder. Readers never block once it is set.
#[derive(Debug, Default)]
pub struct FrozenConfig {
    cell: OnceCell<Resolution>,
}

impl FrozenConfig {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Resolves with `resolver` and freezes the result.
    pub fn freeze(&self, resolver: &EnvironmentConfigResolver) -> Result<&Resolution> {
        let mut resolved_here = false;
        let stored = self.cell.get_or_init(|| {
            resolved_here = true;
            resolver.resolve()
        });

        if !resolved_here {
            return Err(ConfigError::AlreadyFrozen {
                current: stored.environment,
            });
        }

        info!(
            "Configuration frozen from {}: {} (API base URL {:?})",
            resolver.source_description(),
            stored.environment,
            stored.api_base_url.as_str()
        );
        Ok(stored)
    }

    pub fn get(&self) -> Option<&Resolution> {
        self.cell.get()
    }

    /// Returns the frozen value, resolving with `make_resolver` only if nothing
    /// has been frozen yet.
    pub fn get_or_freeze<F>(&self, make_resolver: F) -> &Resolution
    where
        F: FnOnce() -> EnvironmentConfigResolver,
    {
        self.cell.get_or_init(|| make_resolver().resolve())
    }
}
