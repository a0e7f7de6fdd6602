//! The corpus test engine behind the shell's `run` builtin.
//!
//! A run flows through the components in dependency order: the Source
//! Resolver fixes the invocation vector, the Build Step compiles if the
//! toolchain demands it, and the Case Reader drives a loop of
//! {Case Runner -> Result Collector}. The Reporter prints the final tally
//! only when the whole sequence completed without a fatal abort.

pub mod corpus;
pub mod runner;
pub mod target;

use std::path::Path;

use crate::cli::output::Reporter;
use crate::errors::HarnessResult;

pub use corpus::{CaseReader, TestCase};
pub use runner::{run_case, CaseOutcome, ExecutionResult, MAX_CAPTURE_BYTES};
pub use target::{TargetSpec, Toolchain};

/// Pass/total counters for one engine invocation.
///
/// `total` moves exactly once per consumed case and `passed` never exceeds
/// it. Skipped cases (spawn failure) touch neither counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub total: usize,
}

impl Tally {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Drive a full run: resolve the target, build it if needed, then execute
/// and score every corpus pair in order.
///
/// Fatal conditions (unsupported language, missing corpus file, scratch or
/// pipe failure, failed build) abort with an error before the tally line is
/// printed. The engine never terminates the hosting process; the caller
/// decides what an abort means.
pub fn run_corpus(
    target: &Path,
    input: &Path,
    expected: &Path,
    reporter: &mut Reporter,
) -> HarnessResult<Tally> {
    let spec = TargetSpec::resolve(target)?;
    spec.build()?;

    let mut tally = Tally::default();
    for case in CaseReader::open(input, expected)? {
        let case = case?;
        match runner::run_case(&spec, &case)? {
            CaseOutcome::Completed(result) => collect(&case, &result, &mut tally, reporter),
            CaseOutcome::ExecFailure(err) => {
                tally.total += 1;
                reporter.exec_failure(&case, &err);
            }
            CaseOutcome::Skipped(err) => reporter.case_skipped(&case, &err),
        }
    }
    reporter.summary(&tally);
    Ok(tally)
}

/// Byte-exact comparison, trailing terminator included. A target that drops
/// the final newline fails against an expected line that has one; nothing is
/// trimmed or normalized on either side.
fn collect(case: &TestCase, result: &ExecutionResult, tally: &mut Tally, reporter: &mut Reporter) {
    tally.total += 1;
    if result.output == case.expected {
        tally.passed += 1;
        reporter.case_passed(case);
    } else {
        reporter.case_failed(case, result);
    }
}
