//! Integer sequences parsed from a single line of input.
//!
//! A line holds base-10 signed integers separated by whitespace:
//!
//! ```text
//! 10 13 16 21 30 45
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::SequenceError;

/// An ordered, non-empty run of integers.
///
/// Order is significant: the values are treated as consecutive samples of a
/// time series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<i64>);

impl Sequence {
    /// Wrap `values`, rejecting an empty vector.
    pub fn new(values: Vec<i64>) -> Result<Self, SequenceError> {
        if values.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// The same samples in reverse order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|source: ParseIntError| SequenceError::InvalidNumber {
                        token: token.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(values)
    }
}
