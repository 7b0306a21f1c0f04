//! Chunk editing: splice replacement lines into the program at a revision.

use std::sync::Arc;

use super::program::{Inst, Rev};
use super::{LineInfo, LineLog};

impl LineLog {
    /// Replace materialized lines `a1..a2` with `lines`, introduced by `rev`.
    ///
    /// `a1` and `a2` index the last checkout, so check out the base revision
    /// first. Empty `lines` deletes; `a1 == a2` inserts. Revisions before
    /// `rev` keep their content, revisions from `rev` on see the
    /// replacement.
    ///
    /// The edit appends a guarded block of new lines, a guard that skips the
    /// old range, and a copy of the instruction at the anchor, then turns
    /// the anchor itself into a jump to the new block.
    ///
    /// # Panics
    /// Panics when the range is malformed or exceeds the last checkout.
    pub(crate) fn edit_chunk(&mut self, a1: usize, a2: usize, rev: Rev, lines: &[&str]) {
        assert!(a1 <= a2, "illegal chunk ({} > {})", a1, a2);
        assert!(
            a2 <= self.lines.len(),
            "out of bound a2 {} (len {}, forgot checkout?)",
            a2,
            self.lines.len()
        );

        if self.config.track_deps {
            self.record_deps(a1, a2, rev);
        }

        let start = self.program.len();
        let a1_pc = self.lines[a1].pc;

        if !lines.is_empty() {
            let b2_pc = start + lines.len() + 1;
            self.program.push(Inst::JumpIfBefore { rev, pc: b2_pc });
            for line in lines {
                self.program.push(Inst::Line {
                    rev,
                    data: Arc::from(*line),
                });
            }
            debug_assert_eq!(b2_pc, self.program.len(), "bug: wrong pc");
        }

        if a1 < a2 {
            let a2_pc = self.lines[a2 - 1].pc + 1;
            self.program.push(Inst::JumpIfReachedOrAfter { rev, pc: a2_pc });
        }

        let anchor = self.program.get(a1_pc).clone();
        let needs_continuation = !anchor.is_terminal_flow();
        self.lines[a1].pc = self.program.push(anchor);
        if needs_continuation {
            self.program.push(Inst::Jump(a1_pc + 1));
        }
        self.program.redirect(a1_pc, start);
        debug_assert!(self.program.targets_in_bounds(), "bug: jump out of bounds");

        tracing::trace!(
            "edit chunk {}..{} at rev {} with {} line(s); program len {}",
            a1,
            a2,
            rev,
            lines.len(),
            self.program.len()
        );

        let replacement = lines.iter().enumerate().map(|(i, line)| LineInfo {
            data: Arc::from(*line),
            rev,
            pc: start + 1 + i,
            deleted: false,
        });
        self.lines.splice(a1..a2, replacement);
        self.max_rev = self.max_rev.max(rev);
    }
}
