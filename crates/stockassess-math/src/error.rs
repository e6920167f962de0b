//! Error types for the assessment routines.
//!
//! Numerical degeneracy is never an error here: it is reported through
//! sentinel values and penalties. These errors cover structural misuse
//! (mismatched lengths, age windows outside the data) and the opt-in checks.

use thiserror::Error;

/// A specialized Result type for assessment routines.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur when calling the assessment routines.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Fixed-iteration solver ended with a residual above the requested tolerance.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations performed.
        iterations: usize,
        /// Absolute residual at the returned solution.
        residual: f64,
    },

    /// Two sequences that must be paired element-wise differ in length.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// A sequence that must hold at least one element is empty.
    #[error("Empty input: {what}")]
    EmptyInput {
        /// Which input was empty.
        what: &'static str,
    },

    /// Age window does not fit the age-composition data.
    #[error("Invalid age range: kage={kage}, aplus={aplus} for {len} age classes")]
    InvalidAgeRange {
        /// First fully recruited age (1-indexed).
        kage: usize,
        /// Plus-group age (1-indexed).
        aplus: usize,
        /// Number of age classes available.
        len: usize,
    },

    /// An entry that must be strictly positive is not.
    #[error("Non-positive entry at index {index}: {value:.4e}")]
    NonPositive {
        /// Position of the offending entry.
        index: usize,
        /// Its primal value.
        value: f64,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: usize, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}
