use std::env::{self, VarError};

/// Name of the development flag, both at build time and at runtime.
pub const DEV_FLAG_NAME: &str = "DEV";

/// Raw reading of the development flag, before it is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevFlag {
    Set(bool),
    /// A value was present but is neither truthy nor falsy.
    Indeterminate(String),
    Absent,
}

impl DevFlag {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => DevFlag::Set(true),
            "0" | "false" | "no" | "off" => DevFlag::Set(false),
            _ => DevFlag::Indeterminate(raw.to_string()),
        }
    }

    pub fn value(&self) -> Option<bool> {
        match self {
            DevFlag::Set(value) => Some(*value),
            _ => None,
        }
    }
}

/// Where the development flag comes from.
pub trait FlagSource: Send + Sync {
    fn read(&self) -> DevFlag;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// A flag injected by the caller at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFlag(pub bool);

impl FlagSource for StaticFlag {
    fn read(&self) -> DevFlag {
        DevFlag::Set(self.0)
    }

    fn describe(&self) -> String {
        format!("static flag ({})", self.0)
    }
}

/// Reads the flag from a runtime environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarFlag {
    pub name: String,
}

impl EnvVarFlag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for EnvVarFlag {
    fn default() -> Self {
        Self::new(DEV_FLAG_NAME)
    }
}

impl FlagSource for EnvVarFlag {
    fn read(&self) -> DevFlag {
        match env::var(&self.name) {
            Ok(raw) => DevFlag::parse(&raw),
            Err(VarError::NotPresent) => DevFlag::Absent,
            Err(VarError::NotUnicode(raw)) => {
                DevFlag::Indeterminate(raw.to_string_lossy().into_owned())
            }
        }
    }

    fn describe(&self) -> String {
        format!("environment variable {}", self.name)
    }
}

/// The flag baked in when the crate was compiled.
///
/// `DEV` set at build time wins; otherwise a debug build counts as development
/// and a release build as production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildProfileFlag;

impl FlagSource for BuildProfileFlag {
    fn read(&self) -> DevFlag {
        match option_env!("DEV") {
            Some(raw) => DevFlag::parse(raw),
            None => DevFlag::Set(cfg!(debug_assertions)),
        }
    }

    fn describe(&self) -> String {
        match option_env!("DEV") {
            Some(_) => "build-time DEV".to_string(),
            None => "build profile".to_string(),
        }
    }
}
