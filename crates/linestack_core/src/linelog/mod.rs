//! Linear edit history of a single text file, stored as a replayable program.
//!
//! A [`LineLog`] is a small byte-code interpreter. Every revision of the file
//! is produced by running the same program with a different revision window;
//! edits patch new instructions into the program instead of storing textual
//! patches. That gives:
//! - blame for any revision, since each emitted line carries the revision
//!   that introduced it;
//! - edits to a past revision that flow into later revisions without merge
//!   conflicts;
//! - an "all versions at once" view through range checkouts and
//!   [`LineLog::flatten`].
//!
//! Program counters double as stable line identities across checkouts.
//!
//! The structure is single-threaded. Share it behind one exclusive lock if
//! several callers need it.

mod deps;
mod edit;
mod flatten;
mod interpret;
mod program;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use serde::Serialize;

use crate::config::LineLogConfig;
use crate::diff::diff_lines;
use crate::error::LineLogError;
use crate::text::split_lines;

pub use program::{Pc, Rev};
use program::Program;

/// A materialized line produced by a checkout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineInfo {
    /// Line content including its terminator. Empty for the terminal line.
    pub data: Arc<str>,
    /// Revision that introduced the line.
    pub rev: Rev,
    /// Instruction that emitted the line.
    pub pc: Pc,
    /// Not visible at the upper revision of a range checkout. Always `false`
    /// for single-revision checkouts.
    pub deleted: bool,
}

/// A line of [`LineLog::flatten`] with the revisions it is present in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlattenLine {
    /// Revisions whose checkout contains this line.
    pub revs: BTreeSet<Rev>,
    /// Line text, including its trailing newline when present.
    pub data: Arc<str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CheckoutKey {
    rev: Rev,
    start: Option<Rev>,
}

/// Edit history of one text file.
#[derive(Clone, Debug)]
pub struct LineLog {
    program: Program,
    rev_deps: BTreeMap<Rev, BTreeSet<Rev>>,
    config: LineLogConfig,
    max_rev: Rev,
    last_checkout: Option<CheckoutKey>,
    lines: Vec<LineInfo>,
    content: String,
}

impl Default for LineLog {
    fn default() -> Self {
        Self::with_config(LineLogConfig::default())
    }
}

impl LineLog {
    /// Create an empty log. With `track_deps`, edits update [`Self::rev_deps`].
    pub fn new(track_deps: bool) -> Self {
        Self::with_config(LineLogConfig {
            track_deps,
            ..LineLogConfig::default()
        })
    }

    /// Create an empty log with explicit configuration.
    pub fn with_config(config: LineLogConfig) -> Self {
        let mut log = Self {
            program: Program::default(),
            rev_deps: BTreeMap::new(),
            config,
            max_rev: 0,
            last_checkout: None,
            lines: Vec::new(),
            content: String::new(),
        };
        log.checkout(0);
        log
    }

    /// Highest revision recorded so far.
    pub fn max_rev(&self) -> Rev {
        self.max_rev
    }

    /// Revision dependencies, e.g. `{5: {1, 3}}` means rev 5 depends on revs
    /// 1 and 3. Only populated when dependency tracking is enabled.
    pub fn rev_deps(&self) -> &BTreeMap<Rev, BTreeSet<Rev>> {
        &self.rev_deps
    }

    /// Configuration the log was built with.
    pub fn config(&self) -> &LineLogConfig {
        &self.config
    }

    /// Number of instructions in the program.
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// Lines of the last checkout, including the empty terminal line.
    pub fn lines(&self) -> &[LineInfo] {
        &self.lines
    }

    /// Content of the last checkout.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check that `rev` has been recorded.
    ///
    /// # Errors
    /// [`LineLogError::RevisionOutOfRange`] when `rev` exceeds [`Self::max_rev`].
    pub fn ensure_rev(&self, rev: Rev) -> Result<Rev, LineLogError> {
        if rev > self.max_rev {
            return Err(LineLogError::RevisionOutOfRange {
                rev,
                max_rev: self.max_rev,
            });
        }
        Ok(rev)
    }

    /// Check out the content of `rev`, clamped to [`Self::max_rev`].
    ///
    /// Line indexes passed to later edits refer to this checkout.
    pub fn checkout(&mut self, rev: Rev) -> &str {
        self.checkout_with(rev, None)
    }

    /// Check out the revision window `start..=rev`.
    ///
    /// Lines that existed anywhere in the window are included; those not
    /// visible at `rev` are flagged [`LineInfo::deleted`]. With `start == 0`
    /// and `rev == max_rev` every line that ever existed shows up.
    ///
    /// # Panics
    /// Panics when `start > rev`.
    pub fn checkout_range(&mut self, start: Rev, rev: Rev) -> &str {
        assert!(start <= rev, "illegal range ({} > {})", start, rev);
        self.checkout_with(rev, Some(start))
    }

    fn checkout_with(&mut self, rev: Rev, start: Option<Rev>) -> &str {
        let rev = rev.min(self.max_rev);
        let start = start.map(|start| start.min(rev));
        let key = CheckoutKey { rev, start };
        if self.last_checkout == Some(key) {
            return &self.content;
        }

        let mut lines = self.program.execute(rev, rev, None);
        if let Some(start) = start {
            let present: HashSet<Pc> = lines.iter().map(|line| line.pc).collect();
            lines = self.program.execute(start, rev, Some(&present));
        }

        self.content = lines.iter().map(|line| &*line.data).collect();
        self.lines = lines;
        self.last_checkout = Some(key);
        &self.content
    }

    /// Record `text` as a new revision `max_rev + 1`.
    ///
    /// # Returns
    /// The new revision. Checking it out yields `text`.
    pub fn record_text(&mut self, text: &str) -> Rev {
        self.record(text, None)
    }

    /// Edit revision `rev` in place so that it matches `text`.
    ///
    /// Revisions after `rev` may change as well; earlier ones never do.
    /// `rev == 0` means "no revision" and appends like [`Self::record_text`].
    ///
    /// # Returns
    /// The edited revision.
    pub fn record_text_at(&mut self, text: &str, rev: Rev) -> Rev {
        self.record(text, (rev > 0).then_some(rev))
    }

    fn record(&mut self, text: &str, rev: Option<Rev>) -> Rev {
        let (a_rev, b_rev) = match rev {
            Some(rev) => (rev, rev),
            None => (self.max_rev, self.max_rev + 1),
        };

        let b_lines = split_lines(text);
        self.checkout(a_rev);
        let a_data: Vec<Arc<str>> = self.text_lines().iter().map(|l| l.data.clone()).collect();
        let a_lines: Vec<&str> = a_data.iter().map(|data| &**data).collect();
        let blocks = diff_lines(&a_lines, &b_lines, &self.config.diff);

        // Last block first keeps the indexes of earlier blocks valid.
        for block in blocks.iter().rev() {
            self.edit_chunk(block.a1, block.a2, b_rev, &b_lines[block.b1..block.b2]);
        }

        self.content = text.to_string();
        self.last_checkout = Some(CheckoutKey {
            rev: b_rev,
            start: None,
        });
        self.max_rev = self.max_rev.max(b_rev);

        tracing::debug!(
            "recorded rev {} from rev {}: {} block(s), program len {}",
            b_rev,
            a_rev,
            blocks.len(),
            self.program.len()
        );
        b_rev
    }

    /// Revision that introduced line `index` of the last checkout.
    ///
    /// # Returns
    /// `None` for the terminal line or an out-of-range index.
    pub fn line_rev(&self, index: usize) -> Option<Rev> {
        if index >= self.lines.len().saturating_sub(1) {
            return None;
        }
        Some(self.lines[index].rev)
    }

    /// Blame for the last checkout: each line with its introducing revision.
    pub fn annotate(&self) -> impl Iterator<Item = (Rev, &str)> + '_ {
        self.text_lines().iter().map(|line| (line.rev, &*line.data))
    }

    /// Lines of the last checkout without the terminal line.
    fn text_lines(&self) -> &[LineInfo] {
        match self.lines.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}
