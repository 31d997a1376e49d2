//! Line-by-line summation over an input source.
//!
//! Each line is parsed and extrapolated on its own. Lines that fail to parse
//! are recorded in [`Summary::rejected`] and left out of the totals; a failure
//! of the reader itself aborts the whole run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{InputError, InputResult, SequenceError};
use crate::extrapolate::{extrapolate, extrapolate_backward};
use crate::sequence::Sequence;
use crate::{debug_event, log_event};

/// A line that could not be parsed, with its 1-based line number.
#[derive(Debug)]
pub struct RejectedLine {
    pub line: usize,
    pub error: SequenceError,
}

/// Totals accumulated over every accepted line.
///
/// Sums wrap on overflow, matching the extrapolation arithmetic.
#[derive(Debug, Default)]
pub struct Summary {
    /// Sum of next-value extrapolations.
    pub forward: i64,
    /// Sum of previous-value extrapolations, when requested.
    pub backward: Option<i64>,
    /// Number of lines that contributed to the totals.
    pub accepted: usize,
    pub rejected: Vec<RejectedLine>,
}

impl Summary {
    fn new(backward: bool) -> Self {
        Self {
            backward: backward.then_some(0),
            ..Self::default()
        }
    }

    fn record(&mut self, sequence: &Sequence) {
        self.forward = self.forward.wrapping_add(extrapolate(sequence));
        if let Some(total) = self.backward.as_mut() {
            *total = total.wrapping_add(extrapolate_backward(sequence));
        }
        self.accepted += 1;
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Extrapolate every line of `reader` and accumulate the results.
///
/// The backward total is only computed when `backward` is set.
pub fn summarize<R: BufRead>(reader: R, backward: bool) -> InputResult<Summary> {
    let mut summary = Summary::new(backward);

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| InputError::Read {
            line: number,
            source,
        })?;

        match line.parse::<Sequence>() {
            Ok(sequence) => summary.record(&sequence),
            Err(error) => {
                debug_event!("summary", "rejected", "line {number}: {error}");
                summary.rejected.push(RejectedLine {
                    line: number,
                    error,
                });
            }
        }
    }

    log_event!(
        "summary",
        "done",
        "{} accepted, {} rejected",
        summary.accepted,
        summary.rejected.len()
    );
    Ok(summary)
}

/// Open `path` and run [`summarize`] over its lines.
pub fn summarize_file(path: impl AsRef<Path>, backward: bool) -> InputResult<Summary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug_event!("summary", "opened", "{}", path.display());
    summarize(BufReader::new(file), backward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};
    use tempfile::TempDir;

    const SAMPLE: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

    #[test]
    fn test_sample_totals() {
        let summary = summarize(Cursor::new(SAMPLE), true).unwrap();
        assert_eq!(summary.forward, 114);
        assert_eq!(summary.backward, Some(2));
        assert_eq!(summary.accepted, 3);
        assert!(!summary.has_rejections());
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let input = "0 3 6 9 12 15\n1 3 six 10\n10 13 16 21 30 45\n";
        let summary = summarize(Cursor::new(input), false).unwrap();

        assert_eq!(summary.forward, 18 + 68);
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(summary.rejected[0].line, 2);
        assert!(matches!(
            summary.rejected[0].error,
            SequenceError::InvalidNumber { .. }
        ));
    }

    #[test]
    fn test_blank_line_is_rejected() {
        let summary = summarize(Cursor::new("1 2 3\n\n4 5 6\n"), false).unwrap();
        assert_eq!(summary.forward, 4 + 7);
        assert_eq!(summary.rejected.len(), 1);
        assert!(matches!(summary.rejected[0].error, SequenceError::Empty));
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(Cursor::new(""), true).unwrap();
        assert_eq!(summary.forward, 0);
        assert_eq!(summary.backward, Some(0));
        assert_eq!(summary.accepted, 0);
    }

    #[test]
    fn test_backward_total_is_opt_in() {
        let summary = summarize(Cursor::new(SAMPLE), false).unwrap();
        assert_eq!(summary.forward, 114);
        assert_eq!(summary.backward, None);
    }

    #[test]
    fn test_extreme_line_does_not_abort_the_run() {
        let input = "9223372036854775807 -9223372036854775808\n1 2 3\n";
        let summary = summarize(Cursor::new(input), true).unwrap();

        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.forward, i64::MIN + 1 + 4);
        assert_eq!(summary.backward, Some(i64::MAX - 1));
    }

    #[test]
    fn test_totals_wrap() {
        // Single values extrapolate to themselves: MAX + 1.
        let input = "9223372036854775807\n1\n";
        let summary = summarize(Cursor::new(input), false).unwrap();
        assert_eq!(summary.forward, i64::MIN);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_read_failure_is_fatal() {
        let err = summarize(io::BufReader::new(FailingReader), false).unwrap_err();
        assert!(matches!(err, InputError::Read { line: 1, .. }));
    }

    #[test]
    fn test_summarize_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input");
        std::fs::write(&path, SAMPLE).unwrap();

        let summary = summarize_file(&path, false).unwrap();
        assert_eq!(summary.forward, 114);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = summarize_file(temp_dir.path().join("nope"), false).unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
    }
}
