//! Duet CLI — check, format, and run register-machine programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage, input, or assembly error
//! - 3: Runtime error, or nothing recovered

mod commands;
mod logging;

use std::process;

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "recover" => commands::recover(&args[2..]),
        "run" => commands::run(&args[2..]),
        "check" => commands::check(&args[2..]),
        "fmt" => commands::fmt(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: duet <command> <program>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  recover <program>   Run one instance; print the first recovered value");
    eprintln!("  run <program>       Run two instances; print how many values program 1 sent");
    eprintln!("  check <program>     Assemble only and report the instruction count");
    eprintln!("  fmt <program>       Print the program in canonical form");
    eprintln!();
    eprintln!("Set {}=<filter> to enable logging on stderr.", logging::LOG_ENV);
}
