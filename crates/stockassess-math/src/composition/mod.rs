//! Compositional data on the simplex.
//!
//! Age and length compositions are vectors of proportions summing to one.
//! This module works with them through the additive log-ratio view of the
//! logistic-normal distribution:
//!
//! - [`add_comp_noise`]: perturb a composition in log space and renormalize
//! - [`neg_log_logistic_normal`]: logistic-normal likelihood contribution
//! - [`validate_composition`]: opt-in positivity check for either of the above
//!
//! # Example
//!
//! ```rust
//! use stockassess_math::composition::{add_comp_noise, neg_log_logistic_normal};
//!
//! let truth = [0.5, 0.3, 0.2];
//! let noisy = add_comp_noise(&truth, &[0.1, -0.2, 0.05]).unwrap();
//! assert!((noisy.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//!
//! let nll_truth = neg_log_logistic_normal(&noisy, &noisy, 0.1).unwrap();
//! let nll_model = neg_log_logistic_normal(&noisy, &truth, 0.1).unwrap();
//! assert!(nll_model > nll_truth);
//! ```

mod logistic_normal;
mod noise;

pub use logistic_normal::neg_log_logistic_normal;
pub use noise::add_comp_noise;

use stockassess_core::Scalar;

use crate::error::{MathError, MathResult};

/// Checks that every entry of a composition is strictly positive.
///
/// The compositional routines take logarithms without protection and do not
/// call this themselves.
pub fn validate_composition<T: Scalar>(comp: &[T]) -> MathResult<()> {
    match comp.iter().position(|&c| c <= T::zero() || c.value().is_nan()) {
        Some(index) => Err(MathError::NonPositive {
            index,
            value: comp[index].value(),
        }),
        None => Ok(()),
    }
}

/// Errors unless `left` and `right` can be paired element-wise.
pub(crate) fn ensure_same_len<T>(left: &[T], right: &[T]) -> MathResult<()> {
    if left.len() != right.len() {
        return Err(MathError::length_mismatch(left.len(), right.len()));
    }
    Ok(())
}

/// Sum of a sequence of scalars.
pub(crate) fn total<T: Scalar>(xs: &[T]) -> T {
    xs.iter().fold(T::zero(), |acc, &x| acc + x)
}
