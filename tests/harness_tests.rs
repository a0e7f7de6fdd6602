//! Integration tests for the corpus test engine, driving real target
//! subprocesses end to end.
//!
//! Tests that need an interpreter or a C compiler probe for it first and
//! skip politely when it is missing, so the suite stays green on minimal
//! machines.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use minnow::cli::output::Reporter;
use minnow::harness::{self, Tally};
use minnow::HarnessError;

fn python3_available() -> bool {
    Command::new("python3").arg("--version").output().is_ok()
}

fn gcc_available() -> bool {
    Command::new("gcc").arg("--version").output().is_ok()
}

fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn run(target: &Path, input: &Path, expected: &Path) -> Result<Tally, HarnessError> {
    let mut reporter = Reporter::new();
    harness::run_corpus(target, input, expected, &mut reporter)
}

const ECHO_PY: &str = "print(input())\n";
const CONST42_PY: &str = "import sys\nsys.stdin.readline()\nprint(42)\n";
const NO_NEWLINE_PY: &str = "import sys\nsys.stdin.readline()\nsys.stdout.write('ok')\n";

#[test]
fn echo_target_passes_every_paired_line() {
    if !python3_available() {
        eprintln!("skipping: python3 not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "echo.py", ECHO_PY);
    let input = write_fixture(dir.path(), "input.txt", "alpha\nbeta\ngamma\n");
    let expected = write_fixture(dir.path(), "expected.txt", "alpha\nbeta\ngamma\n");

    let tally = run(&target, &input, &expected).expect("engine run");
    assert_eq!((tally.passed, tally.total), (3, 3));
}

#[test]
fn constant_target_fails_only_the_mismatched_lines() {
    if !python3_available() {
        eprintln!("skipping: python3 not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "const42.py", CONST42_PY);
    let input = write_fixture(dir.path(), "input.txt", "a\nb\nc\n");
    let expected = write_fixture(dir.path(), "expected.txt", "42\nwrong\n42\n");

    let tally = run(&target, &input, &expected).expect("engine run");
    assert_eq!((tally.passed, tally.total), (2, 3));
}

#[test]
fn pairing_stops_at_the_shorter_corpus() {
    if !python3_available() {
        eprintln!("skipping: python3 not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "echo.py", ECHO_PY);
    let input = write_fixture(dir.path(), "input.txt", "1\n2\n3\n4\n5\n");
    let expected = write_fixture(dir.path(), "expected.txt", "1\n2\n3\n");

    let tally = run(&target, &input, &expected).expect("engine run");
    assert_eq!((tally.passed, tally.total), (3, 3));
}

#[test]
fn missing_trailing_newline_is_a_mismatch() {
    if !python3_available() {
        eprintln!("skipping: python3 not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "bare.py", NO_NEWLINE_PY);
    let input = write_fixture(dir.path(), "input.txt", "x\n");
    let expected = write_fixture(dir.path(), "expected.txt", "ok\n");

    let tally = run(&target, &input, &expected).expect("engine run");
    assert_eq!((tally.passed, tally.total), (0, 1));
}

#[test]
fn reruns_are_deterministic_and_leave_the_corpus_untouched() {
    if !python3_available() {
        eprintln!("skipping: python3 not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "echo.py", ECHO_PY);
    let input = write_fixture(dir.path(), "input.txt", "same\nsame\n");
    let expected = write_fixture(dir.path(), "expected.txt", "same\ndifferent\n");
    let input_before = fs::read(&input).unwrap();
    let expected_before = fs::read(&expected).unwrap();

    let first = run(&target, &input, &expected).expect("first run");
    let second = run(&target, &input, &expected).expect("second run");

    assert_eq!(first, second);
    assert_eq!((first.passed, first.total), (1, 2));
    assert_eq!(fs::read(&input).unwrap(), input_before);
    assert_eq!(fs::read(&expected).unwrap(), expected_before);
}

#[test]
fn unsupported_suffix_aborts_with_zero_cases() {
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "prog.sh", "echo hi\n");
    let input = write_fixture(dir.path(), "input.txt", "1\n");
    let expected = write_fixture(dir.path(), "expected.txt", "1\n");

    let err = run(&target, &input, &expected).unwrap_err();
    assert!(matches!(err, HarnessError::UnsupportedLanguage { .. }));
}

#[test]
fn missing_corpus_file_aborts_the_run() {
    if !python3_available() {
        eprintln!("skipping: python3 not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "echo.py", ECHO_PY);
    let input = write_fixture(dir.path(), "input.txt", "1\n");

    let err = run(&target, &input, &dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, HarnessError::FileOpen { .. }));
}

#[test]
fn compiled_echo_target_builds_and_passes() {
    if !gcc_available() {
        eprintln!("skipping: gcc not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(
        dir.path(),
        "echo.c",
        "#include <stdio.h>\n\
         int main(void) {\n\
             char buf[4096];\n\
             if (fgets(buf, sizeof buf, stdin)) fputs(buf, stdout);\n\
             return 0;\n\
         }\n",
    );
    let input = write_fixture(dir.path(), "input.txt", "one\ntwo\n");
    let expected = write_fixture(dir.path(), "expected.txt", "one\ntwo\n");

    let tally = run(&target, &input, &expected).expect("engine run");
    assert_eq!((tally.passed, tally.total), (2, 2));
}

#[test]
fn broken_c_target_aborts_before_any_case() {
    if !gcc_available() {
        eprintln!("skipping: gcc not available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let target = write_fixture(dir.path(), "bad.c", "int main(void) { return }\n");
    let input = write_fixture(dir.path(), "input.txt", "1\n");
    let expected = write_fixture(dir.path(), "expected.txt", "1\n");

    let err = run(&target, &input, &expected).unwrap_err();
    assert!(matches!(err, HarnessError::BuildFailed { .. }));
}
