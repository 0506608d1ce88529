//! Duet common types.
//!
//! This crate provides the foundational data structures for the Duet
//! instruction set:
//!
//! - [`Opcode`] — the seven opcodes (`snd`, `set`, `add`, `mul`, `mod`, `rcv`, `jgz`)
//! - [`Operand`] — an integer literal or a register reference
//! - [`Instruction`] — an opcode with arity-checked operands
//! - [`Program`] — an immutable sequence of instructions
//! - [`RegisterFile`] — per-instance named registers, defaulting to 0
//! - [`InstructionError`] — errors from building instructions
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod operand;
pub mod program;
pub mod registers;

// Re-export commonly used types at the crate root.
pub use error::InstructionError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use operand::Operand;
pub use program::Program;
pub use registers::{Register, RegisterFile};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a random register name.
    fn arb_register() -> impl Strategy<Value = Register> {
        "[a-z]".prop_map(Register::new)
    }

    /// Strategy that generates a random operand.
    fn arb_operand() -> impl Strategy<Value = Operand> {
        prop_oneof![
            any::<i64>().prop_map(Operand::Literal),
            arb_register().prop_map(Operand::Register),
        ]
    }

    proptest! {
        /// Resolving a literal returns it regardless of register contents.
        #[test]
        fn literal_resolves_to_itself(
            value in any::<i64>(),
            writes in prop::collection::vec((arb_register(), any::<i64>()), 0..10),
        ) {
            let mut registers = RegisterFile::new();
            for (reg, v) in &writes {
                registers.set(reg, *v);
            }
            let before = registers.clone();
            prop_assert_eq!(Operand::Literal(value).resolve(&registers), value);
            prop_assert_eq!(registers, before);
        }

        /// A register reads 0 until written, then reads the last write.
        #[test]
        fn register_reads_last_write(
            reg in arb_register(),
            values in prop::collection::vec(any::<i64>(), 0..5),
        ) {
            let mut registers = RegisterFile::new();
            prop_assert_eq!(registers.get(&reg), 0);
            for v in &values {
                registers.set(&reg, *v);
            }
            prop_assert_eq!(registers.get(&reg), values.last().copied().unwrap_or(0));
        }

        /// Displaying an operand and classifying the text yields the same operand.
        #[test]
        fn operand_display_is_stable(operand in arb_operand()) {
            prop_assert_eq!(Operand::parse(&operand.to_string()), operand);
        }

        /// Any opcode with the wrong number of operands is rejected.
        #[test]
        fn wrong_arity_rejected(
            op in prop::sample::select(&opcode::ALL_OPCODES[..]),
            operands in prop::collection::vec(arb_register().prop_map(Operand::Register), 0..4),
        ) {
            let result = Instruction::new(op, operands.clone());
            if operands.len() == op.arity() {
                prop_assert!(result.is_ok());
            } else {
                let is_arity_error = matches!(result, Err(InstructionError::Arity { .. }));
                prop_assert!(is_arity_error);
            }
        }
    }
}
