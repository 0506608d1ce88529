//! VM state: program reference, registers, instruction pointer, channel.

use duet_common::{Program, RegisterFile};

use crate::channel::Channel;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The instruction pointer left the program.
    Halted,
    /// The channel reported that no value will ever arrive.
    Terminated,
    /// A `rcv` with a non-zero operand recovered this value.
    Recovered(i64),
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub exit: Exit,
    /// Number of `snd` instructions executed.
    pub sent: u64,
    /// Number of instructions executed.
    pub steps: u64,
}

/// The Duet virtual machine.
///
/// One machine is one running instance. It owns its registers and its end
/// of the channel and borrows the program, which several machines may share.
pub struct VM<'p, C> {
    /// The program being executed.
    pub(crate) program: &'p Program,
    pub(crate) registers: RegisterFile,
    /// Instruction pointer. May leave `[0, len)`, which ends the run.
    pub(crate) ip: i64,
    pub(crate) channel: C,
    pub(crate) sent: u64,
    pub(crate) steps: u64,
    /// Set once the run has stopped; further steps return it unchanged.
    pub(crate) exit: Option<Exit>,
}

impl<'p, C: Channel> VM<'p, C> {
    /// Create a new VM for the given program, starting at instruction 0.
    pub fn new(program: &'p Program, registers: RegisterFile, channel: C) -> Self {
        Self {
            program,
            registers,
            ip: 0,
            channel,
            sent: 0,
            steps: 0,
            exit: None,
        }
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn ip(&self) -> i64 {
        self.ip
    }

    /// How many values this instance has sent so far.
    pub fn sent_count(&self) -> u64 {
        self.sent
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// The exit reason, once the run has stopped.
    pub fn exit(&self) -> Option<Exit> {
        self.exit
    }

    pub(crate) fn outcome(&self, exit: Exit) -> Outcome {
        Outcome {
            exit,
            sent: self.sent,
            steps: self.steps,
        }
    }
}
