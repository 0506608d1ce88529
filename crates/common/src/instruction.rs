//! A single Duet instruction: an opcode with its typed operands.
//!
//! Write targets are held as [`Register`]s rather than [`Operand`]s, so a
//! built instruction can never try to write to a literal.

use std::fmt;

use crate::error::InstructionError;
use crate::opcode::Opcode;
use crate::operand::Operand;
use crate::registers::Register;

/// One parsed instruction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `snd X`
    Snd(Operand),
    /// `set X Y`
    Set(Register, Operand),
    /// `add X Y`
    Add(Register, Operand),
    /// `mul X Y`
    Mul(Register, Operand),
    /// `mod X Y`
    Mod(Register, Operand),
    /// `rcv X`
    Rcv(Register),
    /// `jgz X Y`
    Jgz(Operand, Operand),
}

impl Instruction {
    /// Build an instruction, checking arity and write targets.
    pub fn new(opcode: Opcode, operands: Vec<Operand>) -> Result<Self, InstructionError> {
        let expected = opcode.arity();
        if operands.len() != expected {
            return Err(InstructionError::Arity {
                opcode,
                expected,
                found: operands.len(),
            });
        }

        let mut operands = operands.into_iter();
        // Arity was checked above; these never run dry.
        let mut next = || operands.next().unwrap_or(Operand::Literal(0));
        let target = |operand: Operand| match operand {
            Operand::Register(reg) => Ok(reg),
            Operand::Literal(value) => Err(InstructionError::LiteralDestination { opcode, value }),
        };

        let instr = match opcode {
            Opcode::Snd => Instruction::Snd(next()),
            Opcode::Rcv => Instruction::Rcv(target(next())?),
            Opcode::Set => Instruction::Set(target(next())?, next()),
            Opcode::Add => Instruction::Add(target(next())?, next()),
            Opcode::Mul => Instruction::Mul(target(next())?, next()),
            Opcode::Mod => Instruction::Mod(target(next())?, next()),
            Opcode::Jgz => {
                let cond = next();
                Instruction::Jgz(cond, next())
            }
        };
        Ok(instr)
    }

    /// The opcode of this instruction.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Snd(_) => Opcode::Snd,
            Instruction::Set(..) => Opcode::Set,
            Instruction::Add(..) => Opcode::Add,
            Instruction::Mul(..) => Opcode::Mul,
            Instruction::Mod(..) => Opcode::Mod,
            Instruction::Rcv(_) => Opcode::Rcv,
            Instruction::Jgz(..) => Opcode::Jgz,
        }
    }

    /// Operands in source order. Write targets come back as register operands.
    pub fn operands(&self) -> Vec<Operand> {
        match self {
            Instruction::Snd(x) => vec![x.clone()],
            Instruction::Rcv(x) => vec![Operand::Register(x.clone())],
            Instruction::Set(x, y)
            | Instruction::Add(x, y)
            | Instruction::Mul(x, y)
            | Instruction::Mod(x, y) => vec![Operand::Register(x.clone()), y.clone()],
            Instruction::Jgz(x, y) => vec![x.clone(), y.clone()],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode().mnemonic())?;
        for operand in self.operands() {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}
