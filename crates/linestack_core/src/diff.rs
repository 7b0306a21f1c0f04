//! Line differ producing aligned change blocks between two line sequences.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::Serialize;
use similar::{capture_diff_slices_deadline, Algorithm, DiffTag};

use crate::constants::DEFAULT_DIFF_TIMEOUT;
use crate::error::LineLogError;

/// Diff algorithm used to align two line sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl DiffAlgorithm {
    fn as_similar(self) -> Algorithm {
        match self {
            Self::Myers => Algorithm::Myers,
            Self::Patience => Algorithm::Patience,
            Self::Lcs => Algorithm::Lcs,
        }
    }
}

impl FromStr for DiffAlgorithm {
    type Err = LineLogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "myers" => Ok(Self::Myers),
            "patience" => Ok(Self::Patience),
            "lcs" => Ok(Self::Lcs),
            _ => Err(LineLogError::UnknownDiffAlgorithm(value.to_string())),
        }
    }
}

impl fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Myers => "myers",
            Self::Patience => "patience",
            Self::Lcs => "lcs",
        };
        f.write_str(name)
    }
}

/// Knobs for [`diff_lines`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    pub algorithm: DiffAlgorithm,
    /// Deadline for a single diff. `None` runs to completion.
    pub timeout: Option<Duration>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            timeout: Some(DEFAULT_DIFF_TIMEOUT),
        }
    }
}

/// A differing region: lines `a1..a2` of the old side became `b1..b2` of
/// the new side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DiffBlock {
    pub a1: usize,
    pub a2: usize,
    pub b1: usize,
    pub b2: usize,
}

/// Compute the differing line ranges between `a` and `b`.
///
/// Blocks are ordered, non-overlapping and never empty on both sides. Equal
/// runs are omitted and neighbouring delete/insert operations are merged
/// into a single block.
///
/// Positions are accumulated from operation lengths; the start offsets
/// reported by `similar` are not always contiguous with the previous op.
pub fn diff_lines(a: &[&str], b: &[&str], options: &DiffOptions) -> Vec<DiffBlock> {
    let deadline = options
        .timeout
        .and_then(|timeout| Instant::now().checked_add(timeout));
    let ops = capture_diff_slices_deadline(options.algorithm.as_similar(), a, b, deadline);

    let mut blocks = Vec::new();
    let mut open = DiffBlock {
        a1: 0,
        a2: 0,
        b1: 0,
        b2: 0,
    };
    for op in &ops {
        let (tag, old, new) = op.as_tag_tuple();
        if tag == DiffTag::Equal {
            flush_block(&mut blocks, &mut open, old.len());
        } else {
            open.a2 += old.len();
            open.b2 += new.len();
        }
    }
    flush_block(&mut blocks, &mut open, 0);
    debug_assert_eq!((open.a2, open.b2), (a.len(), b.len()));
    blocks
}

/// Emit `open` if it changed anything, then restart it after `equal_len`
/// unchanged lines.
fn flush_block(blocks: &mut Vec<DiffBlock>, open: &mut DiffBlock, equal_len: usize) {
    if open.a1 != open.a2 || open.b1 != open.b2 {
        blocks.push(*open);
    }
    open.a2 += equal_len;
    open.b2 += equal_len;
    open.a1 = open.a2;
    open.b1 = open.b2;
}

#[cfg(test)]
mod tests;
