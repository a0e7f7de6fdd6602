//! Case Runner: one subprocess per test case, stdin bound to a scratch
//! carrier, stdout captured through a pipe.
//!
//! Execution is strictly sequential: exactly one target subprocess is alive
//! at any time, and the runner blocks on its termination before the next
//! case starts. There is no timeout; a target that never terminates stalls
//! the run.

use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::process::{ExitStatus, Stdio};

use crate::errors::{HarnessError, HarnessResult};
use crate::harness::corpus::TestCase;
use crate::harness::target::TargetSpec;

/// Ceiling on captured output per case. Capture reads to end-of-stream in
/// chunks; this bound only guards against a runaway target.
pub const MAX_CAPTURE_BYTES: u64 = 8 * 1024 * 1024;

/// What happened to a single case.
#[derive(Debug)]
pub enum CaseOutcome {
    /// The target ran to completion; its output was captured in full.
    Completed(ExecutionResult),
    /// The target could not be started (missing binary, not executable).
    /// Counts as a consumed, failed case -- never as empty output.
    ExecFailure(std::io::Error),
    /// Process creation itself failed. The case is skipped and does not
    /// count toward the tally; the run continues.
    Skipped(std::io::Error),
}

/// Captured output and exit status of one completed case execution.
#[derive(Debug)]
pub struct ExecutionResult {
    pub output: Vec<u8>,
    pub status: ExitStatus,
}

/// Run one case: write the input line to a scratch carrier, spawn the
/// target with stdin bound to it, read the output pipe to end-of-stream,
/// then wait for termination.
///
/// Capture strictly precedes the wait. EOF on the pipe is reached once the
/// child exits and closes its write end, so a full read can never race the
/// termination wait or truncate output the way a single bounded read would.
pub fn run_case(spec: &TargetSpec, case: &TestCase) -> HarnessResult<CaseOutcome> {
    let carrier = scratch_carrier(&case.input)?;

    let mut command = spec.command();
    command
        .stdin(Stdio::from(carrier))
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
            return Ok(CaseOutcome::ExecFailure(e));
        }
        Err(e) => return Ok(CaseOutcome::Skipped(e)),
    };

    // The carrier was moved into the child; the parent's copy of the pipe's
    // write end is already closed, so EOF is observable as soon as the child
    // exits. Dropping the handle below releases the read end on every path.
    let mut stdout = child.stdout.take().ok_or_else(|| HarnessError::Pipe {
        source: std::io::Error::new(ErrorKind::BrokenPipe, "child stdout was not captured"),
    })?;

    let mut output = Vec::new();
    (&mut stdout)
        .take(MAX_CAPTURE_BYTES)
        .read_to_end(&mut output)
        .map_err(|source| HarnessError::Pipe { source })?;
    drop(stdout);

    let status = child
        .wait()
        .map_err(|source| HarnessError::Wait { source })?;

    Ok(CaseOutcome::Completed(ExecutionResult { output, status }))
}

/// Anonymous temporary file holding exactly one input line, rewound so the
/// child reads it from the start. Deleted by the OS once both the parent's
/// and the child's descriptors are closed.
fn scratch_carrier(input: &[u8]) -> HarnessResult<std::fs::File> {
    let mut carrier =
        tempfile::tempfile().map_err(|source| HarnessError::ScratchCarrier { source })?;
    carrier
        .write_all(input)
        .map_err(|source| HarnessError::ScratchCarrier { source })?;
    carrier
        .seek(SeekFrom::Start(0))
        .map_err(|source| HarnessError::ScratchCarrier { source })?;
    Ok(carrier)
}
