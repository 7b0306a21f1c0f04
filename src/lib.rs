//! Root crate facade for linestack.

pub use linestack_core::{
    config, constants, diff, error, linelog, text, DiffAlgorithm, DiffBlock, DiffOptions,
    FlattenLine, LineInfo, LineLog, LineLogConfig, LineLogError, Pc, Rev,
};
