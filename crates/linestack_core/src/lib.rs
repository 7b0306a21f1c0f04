//! Core library for linestack (line log, tokenizer, differ, config).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Line differ backed by `similar`.
pub mod diff;
/// Error types for recoverable failures.
pub mod error;
/// Line log program, interpreter and editor.
pub mod linelog;
/// Line tokenization helpers.
pub mod text;

pub use config::LineLogConfig;
pub use diff::{DiffAlgorithm, DiffBlock, DiffOptions};
pub use error::LineLogError;
pub use linelog::{FlattenLine, LineInfo, LineLog, Pc, Rev};
