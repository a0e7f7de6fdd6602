//! Defines the command-line arguments for the minnow shell.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure. With no subcommand, minnow starts its
/// interactive shell.
#[derive(Debug, Parser)]
#[command(
    name = "minnow",
    version,
    about = "A toy interactive shell with a built-in corpus test engine."
)]
pub struct MinnowArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile or interpret a target program, then check it against a
    /// corpus of input/expected-output line pairs.
    Run {
        /// The target program (.c or .py).
        #[arg(required = true)]
        target: PathBuf,
        /// File of input lines, one per case.
        #[arg(required = true)]
        input: PathBuf,
        /// File of expected output lines, paired with the input by line
        /// number.
        #[arg(required = true)]
        expected: PathBuf,
    },
}
