//! Disassembler: program → canonical assembly text.
//!
//! Output format is flat text, one instruction per line, operands separated
//! by a single space, terminated by a newline. No blank lines.

use duet_common::Program;

/// Disassemble a program into canonical assembly text.
///
/// For a program that came from `assemble`, the output reassembles to an
/// identical program.
pub fn disassemble(program: &Program) -> String {
    let mut text = String::new();
    for instr in program.instructions() {
        text.push_str(&instr.to_string());
        text.push('\n');
    }
    text
}
