//! Logistic-normal negative log-density.
//!
//! Reference: Schnute and Haigh (2007), compositional analysis of catch
//! curve data with an application to Sebastes maliger.

use stockassess_core::Scalar;

use crate::barrier::square;
use crate::composition::ensure_same_len;
use crate::error::{MathError, MathResult};

/// Negative log-density of observed proportions under a logistic-normal
/// distribution centred on predicted proportions.
///
/// With `N` classes and geometric means `ỹ` and `p̃`:
///
/// ```text
/// nld = (N - 1)/2 · ln(var) + Σᵢ (ln(yᵢ/ỹ) - ln(pᵢ/p̃))² / (2 var)
/// ```
///
/// Terms that depend on neither `y` nor `p` are dropped, so the result is a
/// likelihood contribution rather than a normalized density. Both vectors
/// must be strictly positive; they need not sum to one since the centred
/// log-ratios are scale invariant.
///
/// # Arguments
///
/// * `y` - Observed proportions
/// * `p` - Predicted (true) proportions
/// * `var` - Variance of the logistic-normal distribution
///
/// # Errors
///
/// Returns an error if `y` is empty or if `y` and `p` differ in length.
///
/// # Example
///
/// ```rust
/// use stockassess_math::neg_log_logistic_normal;
///
/// let y = [0.5, 0.5];
/// let nld = neg_log_logistic_normal(&y, &y, 1.0).unwrap();
/// assert_eq!(nld, 0.0);
/// ```
pub fn neg_log_logistic_normal<T: Scalar>(y: &[T], p: &[T], var: T) -> MathResult<T> {
    ensure_same_len(y, p)?;
    if y.is_empty() {
        return Err(MathError::EmptyInput { what: "observed proportions" });
    }

    let n = T::from_f64(y.len() as f64);
    let two = T::from_f64(2.0);

    let log_y: Vec<T> = y.iter().map(|&v| v.ln()).collect();
    let log_p: Vec<T> = p.iter().map(|&v| v.ln()).collect();

    // ln of the geometric means, taken as mean logs so long vectors of
    // small proportions cannot underflow the product
    let log_ytilde = log_y.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let log_ptilde = log_p.iter().fold(T::zero(), |acc, &v| acc + v) / n;

    let mut nld = (n - T::one()) * var.ln() / two;

    for (&ly, &lp) in log_y.iter().zip(&log_p) {
        nld += square((ly - log_ytilde) - (lp - log_ptilde)) / two / var;
    }

    Ok(nld)
}
