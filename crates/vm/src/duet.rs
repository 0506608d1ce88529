//! Two instances of one program, run concurrently and joined by a [`Link`].

use std::thread;

use duet_common::{Program, RegisterFile};
use tracing::{info, info_span};

use crate::channel::{Link, LinkedChannel};
use crate::error::{DuetError, RuntimeError};
use crate::machine::{Outcome, VM};

/// Result of a completed dual run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuetReport {
    /// How many values program 1 sent before it stopped.
    pub sent_by_program_1: u64,
    /// Whether the run ended because both programs blocked on empty queues.
    pub deadlocked: bool,
}

/// Run programs 0 and 1 side by side until both have stopped.
///
/// Each instance gets its own registers with `p` set to its id, and its own
/// end of the link. Blocks the caller until both threads finish. If either
/// instance fails, the failure is reported once both are done, program 0's
/// first.
pub fn run_duet(program: &Program) -> Result<DuetReport, DuetError> {
    let link = Link::new();
    let (chan0, chan1) = link.endpoints();
    info!(instructions = program.len(), "starting duet");

    let (joined0, joined1) = thread::scope(|s| {
        let h0 = s.spawn(move || run_instance(program, 0, chan0));
        let h1 = s.spawn(move || run_instance(program, 1, chan1));
        (h0.join(), h1.join())
    });

    let _outcome0 = settle(0, joined0)?;
    let outcome1 = settle(1, joined1)?;

    let report = DuetReport {
        sent_by_program_1: outcome1.sent,
        deadlocked: link.is_deadlocked(),
    };
    info!(
        sent = report.sent_by_program_1,
        deadlocked = report.deadlocked,
        "duet finished"
    );
    Ok(report)
}

fn run_instance(
    program: &Program,
    id: u8,
    channel: LinkedChannel<'_>,
) -> Result<Outcome, RuntimeError> {
    let _span = info_span!("program", id).entered();
    let mut vm = VM::new(program, RegisterFile::seeded(i64::from(id)), channel);
    vm.execute()
}

fn settle(
    id: u8,
    joined: thread::Result<Result<Outcome, RuntimeError>>,
) -> Result<Outcome, DuetError> {
    joined
        .map_err(|_| DuetError::Panicked { id })?
        .map_err(|source| DuetError::Instance { id, source })
}
