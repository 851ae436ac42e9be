//! Grader configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use grader_core::guard::TimeoutGuard;
use grader_core::utils::{GenericResult, InfoLogger, create_silent_logger};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A default time limit of a guarded check in seconds.
pub const DEFAULT_MAX_TIME: u64 = 10;

/// A grader configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraderConfig {
    /// Specifies timeout guard configuration.
    pub timeout: Option<TimeoutConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A timeout guard configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutConfig {
    /// Max time of a guarded check in seconds.
    pub max_time: Option<u64>,
    /// Whether the deadline is enforced. Default is true where the platform supports it.
    pub enforced: Option<bool>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Whether reports are written to standard output.
    pub enabled: bool,
}

/// Reads grader configuration from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<GraderConfig> {
    Ok(serde_json::from_reader(reader)?)
}

/// Creates a timeout guard which reports interruption with the logger unless logging is disabled.
/// Explicitly specified max time takes precedence over configuration.
pub fn create_timeout_guard(config: &GraderConfig, max_time: Option<u64>, logger: InfoLogger) -> TimeoutGuard {
    let timeout = config.timeout.as_ref();
    let max_time = max_time.or_else(|| timeout.and_then(|timeout| timeout.max_time)).unwrap_or(DEFAULT_MAX_TIME);
    let is_enforced = timeout.and_then(|timeout| timeout.enforced).unwrap_or(true);

    let logger = match config.logging.as_ref() {
        Some(LoggingConfig { enabled: false }) => create_silent_logger(),
        _ => logger,
    };

    TimeoutGuard::from_secs(max_time).with_logger(logger).with_enforcement(is_enforced)
}
