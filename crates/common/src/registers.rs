//! Named registers and the per-instance register file.

use std::collections::HashMap;
use std::fmt;

/// Name of the register every instance is seeded with its program id.
pub const PROGRAM_ID_REGISTER: &str = "p";

/// A register name. Any token that is not an integer literal names a register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(String);

impl Register {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The private register state of one interpreter instance.
///
/// Registers that were never written read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    values: HashMap<Register, i64>,
}

impl RegisterFile {
    /// Create an empty register file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a register file with `p` set to the given program id.
    pub fn seeded(program_id: i64) -> Self {
        let mut registers = Self::new();
        registers.set(&Register::new(PROGRAM_ID_REGISTER), program_id);
        registers
    }

    /// Current value of a register, 0 if never written.
    pub fn get(&self, register: &Register) -> i64 {
        self.values.get(register).copied().unwrap_or(0)
    }

    pub fn set(&mut self, register: &Register, value: i64) {
        match self.values.get_mut(register) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(register.clone(), value);
            }
        }
    }

    /// Number of registers that have been written at least once.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Written registers in name order.
    pub fn snapshot(&self) -> Vec<(Register, i64)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(reg, &value)| (reg.clone(), value))
            .collect();
        entries.sort();
        entries
    }
}
