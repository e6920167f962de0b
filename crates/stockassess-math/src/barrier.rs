//! Smooth positivity barrier and the squaring helper.
//!
//! [`posfun`] keeps a quantity (biomass after catch, say) above a threshold
//! without a hard clamp: below the threshold the input is reflected to a
//! value above it and a quadratic penalty is charged, so the objective
//! function stays differentiable and the optimizer is pushed back into the
//! feasible region.

use stockassess_core::{select_ge, select_lt, Scalar};

/// Weight of the quadratic penalty charged below the threshold.
pub const PENALTY_WEIGHT: f64 = 0.01;

/// Output of [`posfun`]: the protected value and the penalty it incurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posfun<T> {
    /// `x` when `x >= eps`, otherwise `eps / (2 - eps/x)`.
    pub value: T,
    /// `0` when `x >= eps`, otherwise `0.01 * (x - eps)^2`.
    pub penalty: T,
}

/// Smooth barrier keeping `x` above `eps`.
///
/// - `x >= eps`: returns `x` with no penalty
/// - `x < eps`: returns `eps / (2 - eps/x)` with penalty `0.01 * (x - eps)^2`
///
/// Both branches are computed before selection. The value is continuous at
/// `x = eps`; the slope flips from `-1` to `1` there, since moving `x` further
/// below `eps` pushes the result further above it. For `eps/2 < x < eps` the
/// reflected value lies above `eps`; callers should choose `eps` so that
/// inputs do not fall below `eps/2`, where the formula changes sign.
///
/// # Example
///
/// ```rust
/// use stockassess_math::posfun;
///
/// let above = posfun(2.0_f64, 1.0);
/// assert_eq!(above.value, 2.0);
/// assert_eq!(above.penalty, 0.0);
///
/// let below = posfun(0.8_f64, 1.0);
/// assert!(below.value > 1.0);
/// assert!((below.penalty - 0.01 * 0.04).abs() < 1e-15);
/// ```
pub fn posfun<T: Scalar>(x: T, eps: T) -> Posfun<T> {
    let reflected = eps / (T::from_f64(2.0) - eps / x);
    let charged = T::from_f64(PENALTY_WEIGHT) * square(x - eps);

    Posfun {
        value: select_ge(x, eps, x, reflected),
        penalty: select_lt(x, eps, charged, T::zero()),
    }
}

/// [`posfun`] with a caller-owned penalty accumulator.
///
/// Adds the penalty to `pen` and returns the protected value. The
/// accumulator is only ever added to.
pub fn posfun_acc<T: Scalar>(x: T, eps: T, pen: &mut T) -> T {
    let Posfun { value, penalty } = posfun(x, eps);
    *pen += penalty;
    value
}

/// Returns `x^2`.
#[inline]
pub fn square<T: Scalar>(x: T) -> T {
    x.powi(2)
}

/// Squares every element of `xs`.
pub fn square_all<T: Scalar>(xs: &[T]) -> Vec<T> {
    xs.iter().map(|&x| square(x)).collect()
}
