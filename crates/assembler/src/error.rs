//! Error types for the Duet assembler.

use duet_common::{InstructionError, Opcode};
use thiserror::Error;

/// Errors produced while assembling program text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unknown opcode '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// An opcode was given the wrong number of operands.
    #[error("line {line}: {opcode} expects {expected} operand(s), found {found}")]
    WrongArity {
        line: usize,
        opcode: Opcode,
        expected: usize,
        found: usize,
    },

    /// A literal appeared where a register is written.
    #[error("line {line}: {opcode} cannot write to literal {value}")]
    LiteralDestination {
        line: usize,
        opcode: Opcode,
        value: i64,
    },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },
}

impl AsmError {
    /// Attach a line number to an instruction construction error.
    pub(crate) fn at_line(err: InstructionError, line: usize) -> Self {
        match err {
            InstructionError::UnknownOpcode(token) => AsmError::UnknownOpcode { line, token },
            InstructionError::Arity {
                opcode,
                expected,
                found,
            } => AsmError::WrongArity {
                line,
                opcode,
                expected,
                found,
            },
            InstructionError::LiteralDestination { opcode, value } => {
                AsmError::LiteralDestination {
                    line,
                    opcode,
                    value,
                }
            }
        }
    }

    /// The 1-based line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            AsmError::UnknownOpcode { line, .. }
            | AsmError::WrongArity { line, .. }
            | AsmError::LiteralDestination { line, .. }
            | AsmError::UnexpectedToken { line, .. } => *line,
        }
    }
}
