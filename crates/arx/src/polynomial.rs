//! Polynomial evaluation against rolling history windows.

use std::collections::VecDeque;

/// An ordered coefficient sequence `[c0, c1, ..., cn-1]` evaluated as a
/// weighted inner product against a most-recent-first history window.
///
/// The degree of the polynomial is its coefficient count. Coefficients
/// are only ever replaced wholesale, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from a coefficient sequence.
    ///
    /// Any length is accepted; an empty sequence is a zero-degree
    /// polynomial that contributes nothing when evaluated.
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// Replaces the coefficient sequence wholesale.
    pub fn set_coefficients(&mut self, coeffs: Vec<f64>) {
        self.coeffs = coeffs;
    }

    /// Returns the coefficients in insertion order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the coefficient count.
    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    /// Evaluates the polynomial against a most-recent-first history.
    ///
    /// Returns `Σ ci * history[i]` over the first `degree()` elements.
    /// If the history is shorter than the degree, returns `0.0` — a
    /// defined fallback for partially filled windows, not an error.
    pub fn evaluate(&self, history: &VecDeque<f64>) -> f64 {
        if self.coeffs.len() > history.len() {
            return 0.0;
        }
        self.coeffs
            .iter()
            .zip(history.iter())
            .map(|(c, h)| c * h)
            .sum()
    }
}
