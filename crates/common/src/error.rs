//! Construction errors for Duet instructions.

use thiserror::Error;

use crate::opcode::Opcode;

/// Errors that occur when building an instruction from an opcode and operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    /// The mnemonic is not one of the seven Duet opcodes.
    #[error("unknown opcode '{0}'")]
    UnknownOpcode(String),

    /// Operand count does not match the opcode.
    #[error("{opcode} expects {expected} operand(s), found {found}")]
    Arity {
        opcode: Opcode,
        expected: usize,
        found: usize,
    },

    /// A literal appeared where the opcode writes a register.
    #[error("{opcode} cannot write to literal {value}")]
    LiteralDestination { opcode: Opcode, value: i64 },
}
