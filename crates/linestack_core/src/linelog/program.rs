//! Instruction set and the append-mostly program arena.

use std::sync::Arc;

/// Program counter: offset of an instruction. Doubles as stable line identity.
pub type Pc = usize;

/// Revision number. `0` means "before any revision".
pub type Rev = u32;

/// A single line log instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Inst {
    /// Unconditional jump.
    Jump(Pc),
    /// Jump if the lower bound of the queried window is `>= rev`.
    JumpIfReachedOrAfter { rev: Rev, pc: Pc },
    /// Jump if the upper bound of the queried window is `< rev`.
    JumpIfBefore { rev: Rev, pc: Pc },
    /// Emit one line introduced by `rev`. `data` includes the terminator.
    Line { rev: Rev, data: Arc<str> },
    /// Stop, emitting the empty terminal line.
    End,
}

impl Inst {
    fn jump_target(&self) -> Option<Pc> {
        match self {
            Self::Jump(pc)
            | Self::JumpIfReachedOrAfter { pc, .. }
            | Self::JumpIfBefore { pc, .. } => Some(*pc),
            Self::Line { .. } | Self::End => None,
        }
    }

    /// Whether execution never falls through to `pc + 1` after this
    /// instruction.
    pub(crate) fn is_terminal_flow(&self) -> bool {
        matches!(self, Self::Jump(_) | Self::End)
    }
}

/// Growable instruction arena addressed by [`Pc`].
///
/// Instructions are only appended, except for [`Program::redirect`], the one
/// in-place overwrite a chunk edit performs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Program {
    code: Vec<Inst>,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            code: vec![Inst::End],
        }
    }
}

impl Program {
    pub(crate) fn len(&self) -> usize {
        self.code.len()
    }

    pub(crate) fn get(&self, pc: Pc) -> &Inst {
        &self.code[pc]
    }

    /// Append an instruction and return its pc.
    pub(crate) fn push(&mut self, inst: Inst) -> Pc {
        self.code.push(inst);
        self.code.len() - 1
    }

    /// Overwrite the instruction at `pc` with `Jump(target)`.
    ///
    /// # Returns
    /// The instruction previously stored at `pc`.
    pub(crate) fn redirect(&mut self, pc: Pc, target: Pc) -> Inst {
        std::mem::replace(&mut self.code[pc], Inst::Jump(target))
    }

    /// Whether every jump target addresses an existing instruction.
    pub(crate) fn targets_in_bounds(&self) -> bool {
        self.code
            .iter()
            .filter_map(Inst::jump_target)
            .all(|pc| pc < self.code.len())
    }
}
