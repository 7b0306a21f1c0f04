//! Error types for recoverable linestack failures.
//!
//! Contract violations inside the line log (bad chunk ranges, a program that
//! never terminates) are panics, not variants here.
use thiserror::Error;

use crate::linelog::Rev;

/// Top-level error type for the core crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineLogError {
    #[error("Unknown diff algorithm: {0}")]
    UnknownDiffAlgorithm(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Revision {rev} is out of range (max revision is {max_rev})")]
    RevisionOutOfRange { rev: Rev, max_rev: Rev },
}
