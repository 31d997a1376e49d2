//! Error types for sequence parsing and input processing.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// A single input line could not be turned into a sequence.
///
/// These are recoverable: the offending line is reported and skipped.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("invalid integer '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line holds no values")]
    Empty,
}

/// The input source itself failed. Processing stops and no sum is produced.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

pub type InputResult<T> = Result<T, InputError>;
