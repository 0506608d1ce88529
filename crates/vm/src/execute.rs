//! Main execution loop and opcode dispatch for the Duet VM.

use duet_common::{Instruction, Register};
use tracing::{debug, trace};

use crate::channel::{Channel, ReceivePolicy, Received};
use crate::error::RuntimeError;
use crate::machine::{Exit, Outcome, VM};

impl<C: Channel> VM<'_, C> {
    /// Execute until the run stops or fails.
    ///
    /// The channel is closed on the way out, whether the run succeeded or not.
    pub fn execute(&mut self) -> Result<Outcome, RuntimeError> {
        let result = self.run_to_exit();
        self.channel.close();
        let exit = result?;
        debug!(
            ?exit,
            sent = self.sent,
            steps = self.steps,
            registers = ?self.registers.snapshot(),
            "run finished"
        );
        Ok(self.outcome(exit))
    }

    fn run_to_exit(&mut self) -> Result<Exit, RuntimeError> {
        loop {
            if let Some(exit) = self.step()? {
                return Ok(exit);
            }
        }
    }

    /// Execute one instruction.
    ///
    /// Returns `Ok(Some(exit))` once the run has stopped; stepping a stopped
    /// machine returns the same exit again without doing anything.
    pub fn step(&mut self) -> Result<Option<Exit>, RuntimeError> {
        if let Some(exit) = self.exit {
            return Ok(Some(exit));
        }

        let program = self.program;
        let Some(instr) = program.fetch(self.ip) else {
            trace!(ip = self.ip, "fell off the program");
            return Ok(self.stop(Exit::Halted));
        };
        self.steps += 1;

        match instr {
            Instruction::Snd(x) => {
                let value = x.resolve(&self.registers);
                self.channel.send(value);
                self.sent += 1;
            }
            Instruction::Set(x, y) => {
                let value = y.resolve(&self.registers);
                self.registers.set(x, value);
            }
            Instruction::Add(x, y) => {
                let rhs = y.resolve(&self.registers);
                self.exec_arith(x, rhs, i64::wrapping_add);
            }
            Instruction::Mul(x, y) => {
                let rhs = y.resolve(&self.registers);
                self.exec_arith(x, rhs, i64::wrapping_mul);
            }
            Instruction::Mod(x, y) => {
                let divisor = y.resolve(&self.registers);
                if divisor == 0 {
                    // fetch succeeded, so ip is a valid index
                    return Err(RuntimeError::ModuloByZero {
                        at: self.ip as usize,
                    });
                }
                self.exec_arith(x, divisor, i64::wrapping_rem);
            }
            Instruction::Rcv(x) => {
                if let Some(exit) = self.exec_rcv(x) {
                    return Ok(self.stop(exit));
                }
            }
            Instruction::Jgz(x, y) => {
                if x.resolve(&self.registers) > 0 {
                    let offset = y.resolve(&self.registers);
                    self.ip = self.ip.saturating_add(offset);
                    return Ok(None);
                }
            }
        }

        self.ip += 1;
        Ok(None)
    }

    fn exec_arith(&mut self, x: &Register, rhs: i64, op: fn(i64, i64) -> i64) {
        let value = op(self.registers.get(x), rhs);
        self.registers.set(x, value);
    }

    /// Returns the exit if this `rcv` stops the run.
    fn exec_rcv(&mut self, x: &Register) -> Option<Exit> {
        let value = match self.channel.receive() {
            Received::Value(value) => value,
            Received::Terminated => return Some(Exit::Terminated),
        };

        match self.channel.policy() {
            ReceivePolicy::Store => {
                self.registers.set(x, value);
                None
            }
            ReceivePolicy::Recover if self.registers.get(x) != 0 => {
                Some(Exit::Recovered(value))
            }
            ReceivePolicy::Recover => None,
        }
    }

    fn stop(&mut self, exit: Exit) -> Option<Exit> {
        self.exit = Some(exit);
        Some(exit)
    }
}
