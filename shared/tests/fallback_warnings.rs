//! An unreadable development flag resolves to production and logs one warning
//! naming where the flag came from.
//!
//! The process-wide logger can only be installed once, so this file owns it and
//! runs every case in a single test.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use shared::config::{DevFlag, EnvVarFlag, EnvironmentConfigResolver, FlagSource, StaticFlag};

struct CapturingLogger;

static RECORDS: Lazy<Mutex<Vec<(Level, String)>>> = Lazy::new(|| Mutex::new(Vec::new()));
static LOGGER: CapturingLogger = CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn take_warnings() -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect()
}

struct Unrecognised;

impl FlagSource for Unrecognised {
    fn read(&self) -> DevFlag {
        DevFlag::Indeterminate("maybe".to_string())
    }

    fn describe(&self) -> String {
        "unrecognised source".to_string()
    }
}

#[test]
fn unreadable_flag_warns_once_and_falls_back() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let resolution = EnvironmentConfigResolver::new(Unrecognised).resolve();
    assert_eq!(resolution.api_base_url.as_str(), "");
    assert!(resolution.fell_back);
    assert_eq!(
        take_warnings(),
        vec![
            "Development flag from unrecognised source has unrecognised value \"maybe\", assuming production"
                .to_string()
        ]
    );

    let resolution =
        EnvironmentConfigResolver::new(EnvVarFlag::new("SHARED_WARNING_TEST_NEVER_SET")).resolve();
    assert_eq!(resolution.api_base_url.as_str(), "");
    assert!(resolution.fell_back);
    assert_eq!(
        take_warnings(),
        vec![
            "Development flag from environment variable SHARED_WARNING_TEST_NEVER_SET is not set, assuming production"
                .to_string()
        ]
    );

    // A definite flag resolves silently.
    EnvironmentConfigResolver::new(StaticFlag(true)).resolve();
    EnvironmentConfigResolver::new(StaticFlag(false)).resolve();
    assert!(take_warnings().is_empty());
}
