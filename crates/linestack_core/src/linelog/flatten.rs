//! All-revisions view of the line log.

use std::collections::{BTreeSet, HashSet};

use super::program::Pc;
use super::{FlattenLine, LineLog};

impl LineLog {
    /// List every line that ever existed, each with the revisions it is
    /// present in.
    ///
    /// Lines come out in range-checkout order, so re-joining the lines
    /// present in a revision reproduces that revision's content.
    ///
    /// Cost is roughly `lines * revs` interpreter work. Avoid calling it
    /// frequently on large stacks. Leaves the checkout at `max_rev`.
    pub fn flatten(&mut self) -> Vec<FlattenLine> {
        self.checkout_range(0, self.max_rev);
        let all = self.text_lines();
        let line_pcs: Vec<Pc> = all.iter().map(|info| info.pc).collect();
        let mut result: Vec<FlattenLine> = all
            .iter()
            .map(|info| FlattenLine {
                revs: BTreeSet::new(),
                data: info.data.clone(),
            })
            .collect();

        for rev in 1..=self.max_rev {
            self.checkout(rev);
            let visible: HashSet<Pc> = self.lines.iter().map(|info| info.pc).collect();
            for (line, pc) in result.iter_mut().zip(&line_pcs) {
                if visible.contains(pc) {
                    line.revs.insert(rev);
                }
            }
        }

        tracing::debug!(
            "flattened {} line(s) across {} revision(s)",
            result.len(),
            self.max_rev
        );
        result
    }
}
