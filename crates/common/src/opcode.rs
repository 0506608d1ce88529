//! Opcode definitions for the Duet instruction set.

use std::fmt;
use std::str::FromStr;

use crate::error::InstructionError;

/// Identifies the operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Send (or play) the value of X.
    Snd,
    /// Set register X to the value of Y.
    Set,
    /// Increase register X by the value of Y.
    Add,
    /// Multiply register X by the value of Y.
    Mul,
    /// Set register X to the remainder of X divided by Y.
    Mod,
    /// Receive (or recover) a value into register X.
    Rcv,
    /// Jump by offset Y if X is greater than zero.
    Jgz,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 7] = [
    Opcode::Snd,
    Opcode::Set,
    Opcode::Add,
    Opcode::Mul,
    Opcode::Mod,
    Opcode::Rcv,
    Opcode::Jgz,
];

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Snd => "snd",
            Opcode::Set => "set",
            Opcode::Add => "add",
            Opcode::Mul => "mul",
            Opcode::Mod => "mod",
            Opcode::Rcv => "rcv",
            Opcode::Jgz => "jgz",
        }
    }

    /// Number of operands this opcode takes.
    pub fn arity(&self) -> usize {
        match self {
            Opcode::Snd | Opcode::Rcv => 1,
            Opcode::Set | Opcode::Add | Opcode::Mul | Opcode::Mod | Opcode::Jgz => 2,
        }
    }
}

impl FromStr for Opcode {
    type Err = InstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == s)
            .copied()
            .ok_or_else(|| InstructionError::UnknownOpcode(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_opcodes_count() {
        assert_eq!(ALL_OPCODES.len(), 7);
    }

    #[test]
    fn mnemonic_roundtrip() {
        for &opcode in &ALL_OPCODES {
            let parsed: Opcode = opcode.mnemonic().parse().unwrap();
            assert_eq!(parsed, opcode);
        }
    }

    #[test]
    fn mnemonics_are_lowercase() {
        for &opcode in &ALL_OPCODES {
            let m = opcode.mnemonic();
            assert_eq!(m, m.to_lowercase(), "mnemonic should be lowercase: {m}");
        }
    }

    #[test]
    fn unknown_mnemonic_rejected() {
        assert_eq!(
            "jnz".parse::<Opcode>(),
            Err(InstructionError::UnknownOpcode("jnz".to_string()))
        );
    }

    #[test]
    fn mnemonics_are_case_sensitive() {
        assert!("SND".parse::<Opcode>().is_err());
    }

    #[test]
    fn arity_table() {
        assert_eq!(Opcode::Snd.arity(), 1);
        assert_eq!(Opcode::Rcv.arity(), 1);
        for op in [Opcode::Set, Opcode::Add, Opcode::Mul, Opcode::Mod, Opcode::Jgz] {
            assert_eq!(op.arity(), 2, "{op}");
        }
    }
}
