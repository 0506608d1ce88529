//! Duet assembler — text ↔ program translation.
//!
//! One instruction per line, whitespace-separated tokens, the opcode first.
//! Blank lines are skipped. There are no comments and no labels; jumps are
//! relative instruction offsets.
//!
//! # Usage
//!
//! ```
//! use duet_assembler::{assemble, disassemble};
//!
//! let text = "set a 1\nsnd a\nrcv a\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(program.len(), 3);
//! assert_eq!(disassemble(&program), text);
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for every program
//! produced by `assemble`. A program built in code can name a register
//! `"5"` or `"a b"`; its text reads back as a literal or as extra operands.
//! The disassembler outputs canonical text; the assembler also accepts
//! non-canonical spacing and blank lines.

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use error::AsmError;

use duet_common::Program;
use lexer::tokenize_line;
use parser::parse_line;

/// Assemble text into a program.
///
/// Returns the first error encountered. Nothing runs until the whole text
/// has assembled.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut instructions = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if let Some(instr) = parse_line(tokenize_line(line), idx + 1)? {
            instructions.push(instr);
        }
    }

    Ok(Program::new(instructions))
}

/// Disassemble a program into canonical assembly text.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
