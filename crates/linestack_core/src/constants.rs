//! Shared constants used across linestack crates.

use std::time::Duration;

/// Default deadline handed to the line differ.
///
/// A deadline only affects how minimal the diff is, never whether the
/// recorded revision matches its text.
pub const DEFAULT_DIFF_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable enabling revision dependency tracking.
pub const ENV_TRACK_DEPS: &str = "LINESTACK_TRACK_DEPS";
/// Environment variable selecting the diff algorithm.
pub const ENV_DIFF_ALGORITHM: &str = "LINESTACK_DIFF_ALGORITHM";
/// Environment variable for the diff deadline in milliseconds (`0` disables it).
pub const ENV_DIFF_TIMEOUT_MS: &str = "LINESTACK_DIFF_TIMEOUT_MS";

/// Interpreter step budget per instruction in the program.
pub const STEP_BUDGET_FACTOR: usize = 2;
