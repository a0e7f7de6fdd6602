//! Handles user-facing output for the test engine.
//!
//! All per-case diagnostics and the final tally line go through the
//! [`Reporter`], so the run builtin and the one-shot CLI command print
//! identically. Color is applied only when stdout is a terminal.

use std::io::Write;

use difference::Changeset;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::harness::corpus::TestCase;
use crate::harness::runner::ExecutionResult;
use crate::harness::Tally;

/// Colored console reporter for one engine run.
pub struct Reporter {
    stdout: StandardStream,
}

impl Reporter {
    pub fn new() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn case_passed(&mut self, case: &TestCase) {
        self.tag("PASS", Color::Green);
        let _ = writeln!(self.stdout, ": {}", case.label());
    }

    /// Mismatch diagnostic: the literal expected and captured strings,
    /// the exit status when non-zero, and a line diff.
    pub fn case_failed(&mut self, case: &TestCase, result: &ExecutionResult) {
        self.tag("FAIL", Color::Red);
        let _ = writeln!(self.stdout, ": {}", case.label());

        let expected = String::from_utf8_lossy(&case.expected);
        let actual = String::from_utf8_lossy(&result.output);
        let _ = writeln!(self.stdout, "  Expected: {expected:?}");
        let _ = writeln!(self.stdout, "  Actual:   {actual:?}");
        if !result.status.success() {
            let _ = writeln!(self.stdout, "  Exit:     {}", result.status);
        }

        let changeset = Changeset::new(expected.trim_end(), actual.trim_end(), "\n");
        self.print_diff(&changeset.diffs);
    }

    /// The target could not be started for this case. Reported distinctly
    /// so it is never mistaken for "the program printed nothing".
    pub fn exec_failure(&mut self, case: &TestCase, err: &std::io::Error) {
        self.tag("FAIL", Color::Red);
        let _ = writeln!(
            self.stdout,
            ": {} (target could not be started: {err})",
            case.label()
        );
    }

    /// Process creation failed; the case was skipped without being counted.
    pub fn case_skipped(&mut self, case: &TestCase, err: &std::io::Error) {
        self.tag("SKIP", Color::Yellow);
        let _ = writeln!(self.stdout, ": {} (spawn failed: {err})", case.label());
    }

    /// The final tally line, printed once the case sequence is exhausted.
    pub fn summary(&mut self, tally: &Tally) {
        let _ = writeln!(self.stdout, "{}/{} Tests Passed", tally.passed, tally.total);
    }

    fn tag(&mut self, label: &str, color: Color) {
        let _ = self
            .stdout
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.stdout, "{label}");
        let _ = self.stdout.reset();
    }

    fn print_diff(&mut self, diffs: &[difference::Difference]) {
        for diff in diffs {
            match diff {
                difference::Difference::Same(ref x) => {
                    let _ = self.stdout.reset();
                    let _ = writeln!(self.stdout, "    {}", x);
                }
                difference::Difference::Add(ref x) => {
                    let _ = self
                        .stdout
                        .set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                    let _ = writeln!(self.stdout, "   +{}", x);
                }
                difference::Difference::Rem(ref x) => {
                    let _ = self
                        .stdout
                        .set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                    let _ = writeln!(self.stdout, "   -{}", x);
                }
            }
        }
        let _ = self.stdout.reset();
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
