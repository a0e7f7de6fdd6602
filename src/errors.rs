//! Unified error handling for the test engine.
//!
//! Every variant here is fatal to one engine run: the run aborts, the tally
//! line is not printed, and control returns to the caller. Nothing in this
//! module terminates the host shell.
//!
//! Case-level failures are deliberately absent. A target that cannot be
//! started, or a spawn that fails outright, is reported by the runner as a
//! [`CaseOutcome`](crate::harness::CaseOutcome) variant and the run continues
//! with the next case.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use miette::Diagnostic;
use thiserror::Error;

pub type HarnessResult<T> = Result<T, HarnessError>;

/// Fatal failure modes of the test engine.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// The target's suffix names no known toolchain. Zero cases run.
    #[error("unsupported target language: {}", .path.display())]
    #[diagnostic(
        code(minnow::harness::unsupported_language),
        help("recognized suffixes are .c (compiled) and .py (interpreted)")
    )]
    UnsupportedLanguage { path: PathBuf },

    /// A corpus file is missing or unreadable.
    #[error("could not open {}", .path.display())]
    #[diagnostic(code(minnow::harness::file_open))]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A corpus file failed mid-stream after opening cleanly.
    #[error("could not read from {}", .path.display())]
    #[diagnostic(code(minnow::harness::corpus_read))]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scratch input carrier could not be created, written, or rewound.
    #[error("could not prepare scratch input file")]
    #[diagnostic(code(minnow::harness::scratch_carrier))]
    ScratchCarrier {
        #[source]
        source: io::Error,
    },

    /// The output pipe could not be set up or read to end-of-stream.
    #[error("could not capture target output")]
    #[diagnostic(code(minnow::harness::pipe))]
    Pipe {
        #[source]
        source: io::Error,
    },

    /// Waiting for the target's termination failed.
    #[error("could not wait for target termination")]
    #[diagnostic(code(minnow::harness::wait))]
    Wait {
        #[source]
        source: io::Error,
    },

    /// The compiler itself could not be spawned.
    #[error("could not launch the compiler")]
    #[diagnostic(
        code(minnow::harness::compiler_launch),
        help("is a C compiler installed and on PATH?")
    )]
    CompilerLaunch {
        #[source]
        source: io::Error,
    },

    /// The compiler ran and exited non-zero. The run aborts before any
    /// case executes.
    #[error("compiler exited with {status}:\n{stderr}")]
    #[diagnostic(code(minnow::harness::build_failed))]
    BuildFailed { status: ExitStatus, stderr: String },
}

/// Prints a HarnessError with full miette diagnostics.
pub fn print_error(error: HarnessError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
