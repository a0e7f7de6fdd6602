pub use crate::errors::{print_error, HarnessError, HarnessResult};
pub use crate::harness::{run_corpus, Tally, TargetSpec, Toolchain};

pub mod cli;
pub mod errors;
pub mod harness;
pub mod repl;
pub mod shell;
