//! Program replay.

use std::collections::HashSet;

use super::program::{Inst, Pc, Program, Rev};
use super::LineInfo;
use crate::constants::STEP_BUDGET_FACTOR;

impl Program {
    /// Replay the program for the revision window `start_rev..=end_rev`.
    ///
    /// `JumpIfReachedOrAfter` compares against `start_rev` and `JumpIfBefore`
    /// against `end_rev`. When `present` is given, every emitted line whose pc
    /// is missing from it is flagged `deleted`.
    ///
    /// # Panics
    /// Panics when the program does not reach `End` within its step budget,
    /// which means the control flow is corrupted.
    pub(crate) fn execute(
        &self,
        start_rev: Rev,
        end_rev: Rev,
        present: Option<&HashSet<Pc>>,
    ) -> Vec<LineInfo> {
        let deleted = |pc: Pc| present.is_some_and(|set| !set.contains(&pc));
        let budget = self.len() * STEP_BUDGET_FACTOR;
        let mut lines = Vec::new();
        let mut pc: Pc = 0;

        for _ in 0..budget {
            match self.get(pc) {
                Inst::End => {
                    lines.push(LineInfo {
                        data: "".into(),
                        rev: 0,
                        pc,
                        deleted: deleted(pc),
                    });
                    return lines;
                }
                Inst::Line { rev, data } => {
                    lines.push(LineInfo {
                        data: data.clone(),
                        rev: *rev,
                        pc,
                        deleted: deleted(pc),
                    });
                    pc += 1;
                }
                Inst::Jump(target) => pc = *target,
                Inst::JumpIfReachedOrAfter { rev, pc: target } => {
                    pc = if start_rev >= *rev { *target } else { pc + 1 };
                }
                Inst::JumpIfBefore { rev, pc: target } => {
                    pc = if end_rev < *rev { *target } else { pc + 1 };
                }
            }
        }

        panic!(
            "bug: line log program did not end within {} steps (len {})",
            budget,
            self.len()
        );
    }
}
