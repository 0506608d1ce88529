//! Tokenizer for Duet assembly text.

use duet_common::Operand;

/// A single token from an assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A word: an opcode mnemonic or a register name.
    Word(String),
    /// An optionally signed decimal integer that fits in an `i64`.
    Integer(i64),
}

impl Token {
    /// Convert an operand-position token into an operand.
    pub(crate) fn into_operand(self) -> Operand {
        match self {
            Token::Word(word) => Operand::parse(&word),
            Token::Integer(value) => Operand::Literal(value),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(word) => f.write_str(word),
            Token::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// Tokenize a single line of assembly text.
///
/// Tokens are separated by whitespace. Returns an empty Vec for blank lines.
/// Classification never fails: anything that is not an integer is a word.
pub(crate) fn tokenize_line(line: &str) -> Vec<Token> {
    line.split_whitespace()
        .map(|word| match word.parse::<i64>() {
            Ok(value) => Token::Integer(value),
            Err(_) => Token::Word(word.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn empty_line() {
        assert_eq!(tokenize_line(""), vec![]);
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(tokenize_line("   \t  "), vec![]);
    }

    #[test]
    fn opcode_with_register_and_literal() {
        assert_eq!(
            tokenize_line("set a 1"),
            vec![word("set"), word("a"), Token::Integer(1)]
        );
    }

    #[test]
    fn negative_literal() {
        assert_eq!(
            tokenize_line("jgz a -2"),
            vec![word("jgz"), word("a"), Token::Integer(-2)]
        );
    }

    #[test]
    fn extra_whitespace_ignored() {
        assert_eq!(
            tokenize_line("  rcv\t b  "),
            vec![word("rcv"), word("b")]
        );
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(tokenize_line("SND A"), vec![word("SND"), word("A")]);
    }

    #[test]
    fn oversized_number_is_a_word() {
        assert_eq!(
            tokenize_line("snd 99999999999999999999"),
            vec![word("snd"), word("99999999999999999999")]
        );
    }

    #[test]
    fn into_operand() {
        assert_eq!(Token::Integer(4).into_operand(), Operand::Literal(4));
        assert_eq!(word("x").into_operand(), Operand::parse("x"));
    }
}
