//! The differentiable scalar trait and branch-free selection.
//!
//! Every routine in Stockassess is written against [`Scalar`]. A host
//! estimation framework plugs in its own differentiable type by implementing
//! the trait; `f32`, `f64` and [`Dual`](crate::Dual) are provided.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// A real-valued quantity that may carry derivative information.
///
/// Ordering (`PartialOrd`) compares primal values only. Implementations must
/// propagate derivatives through every arithmetic and transcendental
/// operation listed here.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
{
    /// Lifts a constant into the scalar type (no derivative).
    fn from_f64(value: f64) -> Self;

    /// Returns the primal value.
    ///
    /// Intended for logging and diagnostics. Routines must not branch on it
    /// where a differentiable choice is required.
    fn value(self) -> f64;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential function.
    fn exp(self) -> Self;

    /// Raises `self` to a scalar power.
    fn powf(self, n: Self) -> Self;

    /// Raises `self` to an integer power.
    fn powi(self, n: i32) -> Self;
}

macro_rules! impl_scalar_for_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn value(self) -> f64 {
                    f64::from(self)
                }

                #[inline]
                fn ln(self) -> Self {
                    <$t>::ln(self)
                }

                #[inline]
                fn exp(self) -> Self {
                    <$t>::exp(self)
                }

                #[inline]
                fn powf(self, n: Self) -> Self {
                    <$t>::powf(self, n)
                }

                #[inline]
                fn powi(self, n: i32) -> Self {
                    <$t>::powi(self, n)
                }
            }
        )*
    };
}

impl_scalar_for_float!(f32, f64);

/// Returns `if_true` when `lhs >= rhs`, otherwise `if_false`.
///
/// Both branch values are arguments, so they have already been computed
/// (derivatives included) when the choice is made. Only the chosen value's
/// derivative flows into the result. A `NaN` comparison selects `if_false`.
///
/// # Example
///
/// ```rust
/// use stockassess_core::select_ge;
///
/// assert_eq!(select_ge(2.0_f64, 1.0, 10.0, 20.0), 10.0);
/// assert_eq!(select_ge(0.5_f64, 1.0, 10.0, 20.0), 20.0);
/// ```
#[inline]
pub fn select_ge<T: Scalar>(lhs: T, rhs: T, if_true: T, if_false: T) -> T {
    if lhs >= rhs {
        if_true
    } else {
        if_false
    }
}

/// Returns `if_true` when `lhs < rhs`, otherwise `if_false`.
///
/// See [`select_ge`] for the evaluation contract.
#[inline]
pub fn select_lt<T: Scalar>(lhs: T, rhs: T, if_true: T, if_false: T) -> T {
    if lhs < rhs {
        if_true
    } else {
        if_false
    }
}
