//! Test Case Reader: lazily pairs input lines with expected output lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::{HarnessError, HarnessResult};

/// One corpus pair. Both sides keep their raw bytes, line terminator
/// included, so the downstream comparison stays byte-exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: Vec<u8>,
    pub expected: Vec<u8>,
}

impl TestCase {
    /// The input line with its terminator stripped, for diagnostics.
    pub fn label(&self) -> String {
        String::from_utf8_lossy(&self.input).trim_end().to_string()
    }
}

/// Lazy, finite, non-restartable pairing of the two corpus files.
///
/// Iteration reads one line from each file per step and stops as soon as
/// either stream is exhausted. Excess lines in the longer file are ignored;
/// no case is ever synthesized from a partial pair.
#[derive(Debug)]
pub struct CaseReader {
    input: BufReader<File>,
    expected: BufReader<File>,
    input_path: PathBuf,
    expected_path: PathBuf,
}

impl CaseReader {
    /// Open both corpus files. Either one missing or unreadable aborts the
    /// run before any case executes.
    pub fn open(input_path: &Path, expected_path: &Path) -> HarnessResult<Self> {
        let input = File::open(input_path).map_err(|source| HarnessError::FileOpen {
            path: input_path.to_path_buf(),
            source,
        })?;
        let expected = File::open(expected_path).map_err(|source| HarnessError::FileOpen {
            path: expected_path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            input: BufReader::new(input),
            expected: BufReader::new(expected),
            input_path: input_path.to_path_buf(),
            expected_path: expected_path.to_path_buf(),
        })
    }

    /// One raw line including its terminator, or `None` at end-of-stream.
    fn read_line(
        reader: &mut BufReader<File>,
        path: &Path,
    ) -> HarnessResult<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| HarnessError::CorpusRead {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

impl Iterator for CaseReader {
    type Item = HarnessResult<TestCase>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = match Self::read_line(&mut self.input, &self.input_path) {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        let expected = match Self::read_line(&mut self.expected, &self.expected_path) {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok(TestCase { input, expected }))
    }
}
