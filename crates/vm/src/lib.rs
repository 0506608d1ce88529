//! Duet virtual machine — runs register-machine programs alone or in pairs.
//!
//! The VM is a register machine with:
//! - Named `i64` registers, private to each running instance
//! - A signed instruction pointer; leaving the program ends the run
//! - A pluggable [`Channel`] behind `snd` and `rcv`
//!
//! Two entry points cover the two ways a program can run:
//!
//! - [`recover`]: one instance with a [`LocalChannel`]. `snd` plays a value;
//!   the first `rcv` with a non-zero operand recovers the last value played.
//! - [`run_duet`]: two instances (`p` = 0 and `p` = 1) on two threads,
//!   exchanging values through FIFO queues until both stop. Mutual blocking
//!   on empty queues ends the run.
//!
//! # Usage
//!
//! ```
//! use duet_common::{Instruction, Operand, Program, Register};
//! use duet_vm::recover;
//!
//! let program = Program::new(vec![
//!     Instruction::Snd(Operand::Literal(42)),
//!     Instruction::Rcv(Register::new("p")),
//!     Instruction::Set(Register::new("p"), Operand::Literal(1)),
//!     Instruction::Jgz(Operand::Literal(1), Operand::Literal(-2)),
//! ]);
//!
//! assert_eq!(recover(&program).unwrap(), Some(42));
//! ```

pub mod channel;
pub mod duet;
pub mod error;
pub mod execute;
pub mod machine;

pub use channel::{Channel, Link, LinkedChannel, LocalChannel, ReceivePolicy, Received};
pub use duet::{run_duet, DuetReport};
pub use error::{DuetError, RuntimeError};
pub use machine::{Exit, Outcome, VM};

use duet_common::{Program, RegisterFile};

/// Run a single instance and return the first recovered value.
///
/// Returns `Ok(None)` if the program falls off the end without a `rcv`
/// ever firing.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution fails (modulo by zero).
pub fn recover(program: &Program) -> Result<Option<i64>, RuntimeError> {
    let mut vm = VM::new(program, RegisterFile::seeded(0), LocalChannel::new());
    match vm.execute()?.exit {
        Exit::Recovered(value) => Ok(Some(value)),
        Exit::Halted | Exit::Terminated => Ok(None),
    }
}
