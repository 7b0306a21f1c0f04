//! Configuration loading from environment variables.

use std::env;
use std::time::Duration;

use crate::constants::{ENV_DIFF_ALGORITHM, ENV_DIFF_TIMEOUT_MS, ENV_TRACK_DEPS};
use crate::diff::{DiffAlgorithm, DiffOptions};
use crate::error::LineLogError;

/// Construction-time configuration for a [`crate::LineLog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineLogConfig {
    /// Record which earlier revisions each edited revision depends on.
    pub track_deps: bool,
    pub diff: DiffOptions,
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a diff deadline in milliseconds. `0` disables the deadline.
fn parse_timeout_ms(value: &str) -> Result<Option<Duration>, LineLogError> {
    let millis: u64 = value
        .trim()
        .parse()
        .map_err(|_| LineLogError::InvalidValue {
            key: ENV_DIFF_TIMEOUT_MS.to_string(),
            value: value.to_string(),
        })?;
    Ok((millis > 0).then(|| Duration::from_millis(millis)))
}

impl LineLogConfig {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`LineLogConfig`] with defaults applied when env vars are
    /// missing or unrecognized.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unrecognized values keep their default and are reported through
    /// `tracing::warn!`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TRACK_DEPS) {
            match parse_env_flag(&raw) {
                Some(enabled) => config.track_deps = enabled,
                None => tracing::warn!("Ignoring unrecognized {}={:?}", ENV_TRACK_DEPS, raw),
            }
        }

        if let Some(raw) = lookup(ENV_DIFF_ALGORITHM) {
            match raw.parse::<DiffAlgorithm>() {
                Ok(algorithm) => config.diff.algorithm = algorithm,
                Err(err) => tracing::warn!("{}; using {}", err, config.diff.algorithm),
            }
        }

        if let Some(raw) = lookup(ENV_DIFF_TIMEOUT_MS) {
            match parse_timeout_ms(&raw) {
                Ok(timeout) => config.diff.timeout = timeout,
                Err(err) => tracing::warn!("{}; keeping default diff timeout", err),
            }
        }

        config
    }
}
