//! Parser for Duet assembly tokens → instructions.

use crate::error::AsmError;
use crate::lexer::Token;
use duet_common::{Instruction, Opcode};

/// Parse the tokens of a single line into an instruction.
///
/// Returns `Ok(None)` for blank lines (empty token list).
pub(crate) fn parse_line(
    tokens: Vec<Token>,
    line_num: usize,
) -> Result<Option<Instruction>, AsmError> {
    let mut tokens = tokens.into_iter();

    let mnemonic = match tokens.next() {
        None => return Ok(None),
        Some(Token::Word(word)) => word,
        Some(other @ Token::Integer(_)) => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: other.to_string(),
            })
        }
    };

    let opcode: Opcode = mnemonic.parse().map_err(|e| AsmError::at_line(e, line_num))?;

    let operands = tokens.map(Token::into_operand).collect();

    Instruction::new(opcode, operands)
        .map(Some)
        .map_err(|e| AsmError::at_line(e, line_num))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize_line;
    use duet_common::{Operand, Register};

    fn parse(text: &str, line: usize) -> Result<Option<Instruction>, AsmError> {
        parse_line(tokenize_line(text), line)
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse("", 1), Ok(None));
    }

    #[test]
    fn parse_each_opcode() {
        let cases = [
            ("snd a", Instruction::Snd(Operand::parse("a"))),
            ("set a 1", Instruction::Set(Register::new("a"), Operand::Literal(1))),
            ("add a b", Instruction::Add(Register::new("a"), Operand::parse("b"))),
            ("mul a a", Instruction::Mul(Register::new("a"), Operand::parse("a"))),
            ("mod a 5", Instruction::Mod(Register::new("a"), Operand::Literal(5))),
            ("rcv a", Instruction::Rcv(Register::new("a"))),
            ("jgz a -1", Instruction::Jgz(Operand::parse("a"), Operand::Literal(-1))),
        ];
        for (text, expected) in cases {
            assert_eq!(parse(text, 1), Ok(Some(expected)), "parsing {text:?}");
        }
    }

    #[test]
    fn jgz_accepts_literal_condition() {
        assert_eq!(
            parse("jgz 1 3", 1),
            Ok(Some(Instruction::Jgz(Operand::Literal(1), Operand::Literal(3))))
        );
    }

    #[test]
    fn unknown_opcode() {
        let err = parse("hlt", 3).unwrap_err();
        assert_eq!(
            err,
            AsmError::UnknownOpcode {
                line: 3,
                token: "hlt".to_string()
            }
        );
    }

    #[test]
    fn missing_operand() {
        let err = parse("set a", 2).unwrap_err();
        assert_eq!(
            err,
            AsmError::WrongArity {
                line: 2,
                opcode: Opcode::Set,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn extra_operand() {
        let err = parse("snd a b", 6).unwrap_err();
        assert!(matches!(
            err,
            AsmError::WrongArity {
                line: 6,
                opcode: Opcode::Snd,
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn literal_destination() {
        let err = parse("mul 2 a", 4).unwrap_err();
        assert_eq!(
            err,
            AsmError::LiteralDestination {
                line: 4,
                opcode: Opcode::Mul,
                value: 2
            }
        );
    }

    #[test]
    fn number_as_first_token() {
        let err = parse("42 a", 1).unwrap_err();
        assert_eq!(
            err,
            AsmError::UnexpectedToken {
                line: 1,
                token: "42".to_string()
            }
        );
    }
}
