//! Additive logistic-normal noise for compositions.

use stockassess_core::Scalar;

use crate::composition::{ensure_same_len, total};
use crate::error::MathResult;

/// Perturbs a composition with log-space noise and restores the unit sum.
///
/// Computes `exp(ln(input) + noise)` element-wise and divides every entry by
/// the total. Used for random walks in compositional quantities and for
/// simulating ageing error; the noise itself comes from the caller.
///
/// Every `input` entry must be strictly positive (see
/// [`validate_composition`](crate::composition::validate_composition)); the
/// logarithm is taken without protection. An empty input yields an empty
/// output.
///
/// # Errors
///
/// Returns [`MathError::LengthMismatch`](crate::MathError::LengthMismatch)
/// if `input` and `noise` differ in length.
pub fn add_comp_noise<T: Scalar>(input: &[T], noise: &[T]) -> MathResult<Vec<T>> {
    ensure_same_len(input, noise)?;

    let mut output: Vec<T> = input
        .iter()
        .zip(noise)
        .map(|(&share, &eps)| (share.ln() + eps).exp())
        .collect();

    let sum = total(&output);
    for share in &mut output {
        *share /= sum;
    }

    Ok(output)
}
