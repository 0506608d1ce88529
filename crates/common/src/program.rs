//! Program representation for Duet instruction streams.
//!
//! A program is an ordered, 0-indexed sequence of instructions. It is built
//! once and then only read; the dual runner shares one program between both
//! instances by reference.

use std::fmt;

use crate::instruction::Instruction;

/// A Duet program: a sequence of instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Instruction at a signed instruction pointer.
    ///
    /// Returns `None` when the pointer is negative or past the end, which is
    /// how a run falls off the program.
    pub fn fetch(&self, ip: i64) -> Option<&Instruction> {
        usize::try_from(ip)
            .ok()
            .and_then(|idx| self.instructions.get(idx))
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.instructions {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}
