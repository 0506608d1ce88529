//! CLI command implementations.

use std::fs;

use duet_common::Program;
use tracing::debug;

/// Run one instance and print the recovered value.
pub fn recover(args: &[String]) -> Result<(), i32> {
    let input = required_input(args, "recover")?;
    let program = read_program(input)?;

    match duet_vm::recover(&program) {
        Ok(Some(value)) => {
            println!("{value}");
            Ok(())
        }
        Ok(None) => {
            eprintln!("error: {input} finished without recovering a value");
            Err(3)
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Run two instances and print program 1's send count.
pub fn run(args: &[String]) -> Result<(), i32> {
    let input = required_input(args, "run")?;
    let program = read_program(input)?;

    match duet_vm::run_duet(&program) {
        Ok(report) => {
            println!("{}", report.sent_by_program_1);
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Assemble a program without running it.
pub fn check(args: &[String]) -> Result<(), i32> {
    let input = required_input(args, "check")?;
    let program = read_program(input)?;
    println!("OK: {input} ({} instructions)", program.len());
    Ok(())
}

/// Print a program in canonical form.
pub fn fmt(args: &[String]) -> Result<(), i32> {
    let input = required_input(args, "fmt")?;
    let program = read_program(input)?;
    print!("{}", duet_assembler::disassemble(&program));
    Ok(())
}

// --- Helpers ---

/// The single positional argument every command takes.
fn required_input<'a>(args: &'a [String], command: &str) -> Result<&'a str, i32> {
    match args {
        [input] => Ok(input.as_str()),
        [] => {
            eprintln!("error: {command} requires an input file");
            eprintln!("Usage: duet {command} <program>");
            Err(1)
        }
        [_, extra, ..] => {
            eprintln!("error: unexpected argument '{extra}'");
            eprintln!("Usage: duet {command} <program>");
            Err(1)
        }
    }
}

/// Read and assemble a program text file.
fn read_program(path: &str) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;

    let program = duet_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {path}: {e}");
        1
    })?;

    debug!(path, instructions = program.len(), "assembled");
    Ok(program)
}
