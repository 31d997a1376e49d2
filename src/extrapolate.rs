//! Next-value extrapolation by repeated finite differencing.
//!
//! Each layer holds the successive differences of the layer above it. Once a
//! layer is entirely zero the stack is complete, and the next value of every
//! layer follows by summing back up from the bottom:
//!
//! ```text
//! 0   3   6   9  12  15  [18]
//!   3   3   3   3   3   [3]
//!     0   0   0   0   [0]
//! ```

use crate::sequence::Sequence;

/// Difference layers of one sequence, layer 0 being the sequence itself.
///
/// Built fresh for every extrapolation and consumed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStack {
    layers: Vec<Vec<i64>>,
}

impl LayerStack {
    /// Difference `sequence` until a layer of all zeros appears.
    ///
    /// An empty layer counts as all zeros, so a single-value sequence stops
    /// after one step.
    pub fn build(sequence: &Sequence) -> Self {
        let mut layers = vec![sequence.values().to_vec()];

        loop {
            let (next, all_zero) = {
                let current = &layers[layers.len() - 1];
                let next = difference(current);
                let all_zero = next.iter().all(|&d| d == 0);
                (next, all_zero)
            };

            layers.push(next);
            if all_zero {
                break;
            }
        }

        Self { layers }
    }

    pub fn layers(&self) -> &[Vec<i64>] {
        &self.layers
    }

    /// Number of difference layers below the input, including the zero layer.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Extend every layer by one element and return the new last element of
    /// layer 0.
    pub fn extrapolate(mut self) -> i64 {
        let mut carry = 0;
        if let Some(terminal) = self.layers.last_mut() {
            terminal.push(carry);
        }

        for layer in self.layers.iter_mut().rev().skip(1) {
            // Layers above the terminal one are never empty.
            let last = layer.last().copied().unwrap_or_default();
            carry = carry.wrapping_add(last);
            layer.push(carry);
        }

        carry
    }
}

/// Successive differences: element `i` is `values[i + 1] - values[i]`.
///
/// Arithmetic wraps on overflow (two's complement), identically in debug and
/// release builds.
pub fn difference(values: &[i64]) -> Vec<i64> {
    values.windows(2).map(|w| w[1].wrapping_sub(w[0])).collect()
}

/// The value that would follow the last element of `sequence`.
pub fn extrapolate(sequence: &Sequence) -> i64 {
    LayerStack::build(sequence).extrapolate()
}

/// The value that would precede the first element of `sequence`.
pub fn extrapolate_backward(sequence: &Sequence) -> i64 {
    extrapolate(&sequence.reversed())
}
