//! Revision dependency tracking.

use super::program::Rev;
use super::LineLog;

impl LineLog {
    /// Mark `rev` as depending on every earlier revision that introduced a
    /// line in `a1..a2`, widened by one line on each side.
    pub(super) fn record_deps(&mut self, a1: usize, a2: usize, rev: Rev) {
        let deps = self.rev_deps.entry(rev).or_default();
        let lo = a1.saturating_sub(1);
        let hi = (a2 + 1).min(self.lines.len());
        for line in self.lines.get(lo..hi).unwrap_or_default() {
            if line.rev > 0 && line.rev < rev {
                deps.insert(line.rev);
            }
        }
    }
}
