//! Source Resolver and Build Step.
//!
//! The resolver inspects a target path once, decides the toolchain from the
//! final `.`-delimited suffix, and fixes the invocation argument vector for
//! the whole run. Base names strip only that final extension, so `a.b.c`
//! yields the base `a.b` -- one rule for both suffix detection and name
//! derivation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::{HarnessError, HarnessResult};

/// Compiler used for `.c` targets.
const COMPILER: &str = "gcc";

/// Interpreter used for `.py` targets.
const INTERPRETER: &str = "python3";

/// Whether a target needs a compile step before it can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    Compiled,
    Interpreted,
}

/// Immutable description of how to invoke a target program. Built once per
/// run, before the first case executes.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    pub(crate) source: PathBuf,
    pub(crate) toolchain: Toolchain,
    pub(crate) argv: Vec<String>,
}

impl TargetSpec {
    /// Decide the toolchain and invocation vector for a target path.
    ///
    /// Interpreted targets receive the source path as written; stripping the
    /// suffix (as older designs did) would hand the interpreter a file that
    /// does not exist.
    pub fn resolve(source: &Path) -> HarnessResult<Self> {
        match source.extension().and_then(|e| e.to_str()) {
            Some("c") => {
                let exe = invocation_path(&source.with_extension(""));
                Ok(Self {
                    source: source.to_path_buf(),
                    toolchain: Toolchain::Compiled,
                    argv: vec![exe],
                })
            }
            Some("py") => Ok(Self {
                source: source.to_path_buf(),
                toolchain: Toolchain::Interpreted,
                argv: vec![
                    INTERPRETER.to_string(),
                    source.to_string_lossy().into_owned(),
                ],
            }),
            _ => Err(HarnessError::UnsupportedLanguage {
                path: source.to_path_buf(),
            }),
        }
    }

    pub fn toolchain(&self) -> Toolchain {
        self.toolchain
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Command for one case execution; stdio wiring is the runner's job.
    pub(crate) fn command(&self) -> Command {
        let mut cmd = Command::new(&self.argv[0]);
        cmd.args(&self.argv[1..]);
        cmd
    }

    /// Compile the target, blocking until the compiler exits. A non-zero
    /// compiler exit aborts the run before any case executes. No-op for
    /// interpreted targets.
    pub fn build(&self) -> HarnessResult<()> {
        if self.toolchain != Toolchain::Compiled {
            return Ok(());
        }
        let base = self.source.with_extension("");
        let output = Command::new(COMPILER)
            .arg("-o")
            .arg(&base)
            .arg(&self.source)
            .output()
            .map_err(|source| HarnessError::CompilerLaunch { source })?;
        if !output.status.success() {
            return Err(HarnessError::BuildFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

/// Executables with no directory component need a `./` prefix so the spawn
/// does not fall back to a PATH lookup.
fn invocation_path(base: &Path) -> String {
    if base.parent().map_or(true, |p| p.as_os_str().is_empty()) {
        format!("./{}", base.display())
    } else {
        base.display().to_string()
    }
}
