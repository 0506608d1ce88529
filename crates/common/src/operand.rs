//! Instruction operands: integer literals or register references.

use std::fmt;

use crate::registers::{Register, RegisterFile};

/// An instruction argument, resolved at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// An optionally signed decimal integer.
    Literal(i64),
    /// A register name. Reads 0 until written.
    Register(Register),
}

impl Operand {
    /// Classify a raw token.
    ///
    /// Anything that parses as an `i64` is a literal; every other token is a
    /// register name. This never fails.
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(value) => Operand::Literal(value),
            Err(_) => Operand::Register(Register::new(token)),
        }
    }

    /// Resolve to a value. Literals never consult the register file.
    pub fn resolve(&self, registers: &RegisterFile) -> i64 {
        match self {
            Operand::Literal(value) => *value,
            Operand::Register(reg) => registers.get(reg),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{value}"),
            Operand::Register(reg) => write!(f, "{reg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive_literal() {
        assert_eq!(Operand::parse("42"), Operand::Literal(42));
    }

    #[test]
    fn parse_negative_literal() {
        assert_eq!(Operand::parse("-1"), Operand::Literal(-1));
    }

    #[test]
    fn parse_explicit_plus_literal() {
        assert_eq!(Operand::parse("+3"), Operand::Literal(3));
    }

    #[test]
    fn parse_register() {
        assert_eq!(Operand::parse("a"), Operand::Register(Register::new("a")));
    }

    #[test]
    fn non_integer_tokens_are_registers() {
        assert_eq!(
            Operand::parse("1x"),
            Operand::Register(Register::new("1x"))
        );
        assert_eq!(Operand::parse("-"), Operand::Register(Register::new("-")));
    }

    #[test]
    fn literal_out_of_range_is_register() {
        let token = "99999999999999999999";
        assert_eq!(
            Operand::parse(token),
            Operand::Register(Register::new(token))
        );
    }

    #[test]
    fn resolve_unset_register_is_zero() {
        let registers = RegisterFile::new();
        assert_eq!(Operand::parse("z").resolve(&registers), 0);
    }

    #[test]
    fn resolve_register_value() {
        let registers = RegisterFile::seeded(1);
        assert_eq!(Operand::parse("p").resolve(&registers), 1);
    }

    #[test]
    fn resolve_literal_ignores_registers() {
        let registers = RegisterFile::seeded(9);
        assert_eq!(Operand::Literal(-7).resolve(&registers), -7);
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(Operand::parse("-17").to_string(), "-17");
        assert_eq!(Operand::parse("b").to_string(), "b");
    }
}
