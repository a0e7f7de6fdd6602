//! The minnow command-line interface.
//!
//! This module is the entry point for the binary: it either starts the
//! interactive shell or dispatches a one-shot `run` of the test engine.

use clap::Parser;
use std::process;

use crate::cli::args::{Command, MinnowArgs};
use crate::cli::output::Reporter;
use crate::errors::print_error;
use crate::harness;
use crate::repl;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
///
/// In one-shot mode the process exit code is 0 only when the run completed
/// and every case passed; a fatal abort or any failed case exits 1. The
/// interactive shell makes its own continue/stop decisions instead.
pub fn run() {
    let args = MinnowArgs::parse();

    match args.command {
        None => repl::run_repl(),
        Some(Command::Run {
            target,
            input,
            expected,
        }) => {
            let mut reporter = Reporter::new();
            match harness::run_corpus(&target, &input, &expected, &mut reporter) {
                Ok(tally) if tally.all_passed() => {}
                Ok(_) => process::exit(1),
                Err(e) => {
                    print_error(e);
                    process::exit(1);
                }
            }
        }
    }
}
